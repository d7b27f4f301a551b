//! Tests for the service container wired with the real filesystem

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use nodewalk::application::{ApplicationError, InputSource, Notation};
use nodewalk::config::Settings;
use nodewalk::domain::IslandSearch;
use nodewalk::infrastructure::ServiceContainer;
use nodewalk::util::testing;

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write input file");
    path
}

#[test]
fn given_grid_file_when_counting_islands_then_reads_through_filesystem() {
    testing::init_test_setup();
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "grid.txt", "11000\n11000\n00100\n00011\n");
    let container = ServiceContainer::new(Settings::default());

    // Act
    let report = container
        .algorithms
        .islands(&InputSource::File(path), Some(IslandSearch::BreadthFirst))
        .unwrap();

    // Assert
    assert_eq!(report.count, 3);
    assert_eq!(report.search, IslandSearch::BreadthFirst);
}

#[test]
fn given_input_dir_when_loading_relative_tree_then_resolves() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "tree.txt", "[3,9,20,null,null,15,7]\n");
    let settings = Settings {
        input_dir: Some(dir.path().to_path_buf()),
        ..Settings::default()
    };
    let container = ServiceContainer::new(settings);

    let report = container
        .algorithms
        .levels(&InputSource::from_arg("@tree.txt"))
        .unwrap();

    assert_eq!(report.levels, vec![vec![3], vec![9, 20], vec![15, 7]]);
}

#[test]
fn given_operand_files_when_adding_then_sums_chains() {
    let dir = TempDir::new().unwrap();
    let a = write_input(&dir, "a.txt", "[9,9]");
    let b = write_input(&dir, "b.txt", "[1]");
    let container = ServiceContainer::new(Settings::default());

    let report = container
        .algorithms
        .add(&InputSource::File(a), &InputSource::File(b), Notation::Digits)
        .unwrap();

    assert_eq!(report.sum.unwrap().digits(), vec![0, 0, 1]);
}

#[test]
fn given_missing_file_when_loading_then_missing_input_error() {
    let dir = TempDir::new().unwrap();
    let container = ServiceContainer::new(Settings::default());

    let result = container
        .algorithms
        .load_grid(&InputSource::File(dir.path().join("absent.txt")));

    assert!(matches!(result, Err(ApplicationError::MissingInput(_))));
}

#[test]
fn given_directory_as_input_when_loading_then_missing_input_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("grid.txt")).unwrap();
    let container = ServiceContainer::new(Settings::default());

    let result = container
        .algorithms
        .load_grid(&InputSource::File(dir.path().join("grid.txt")));

    assert!(matches!(result, Err(ApplicationError::MissingInput(_))));
}

#[test]
fn given_no_config_file_when_writing_template_then_creates_it_once() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("nodewalk.toml");
    let container = ServiceContainer::new(Settings::default());

    // Act
    let first = container.write_config_template(&path).unwrap();
    let second = container.write_config_template(&path).unwrap();

    // Assert
    assert!(first);
    assert!(!second, "existing config must not be overwritten");
    assert_eq!(fs::read_to_string(&path).unwrap(), Settings::template());
}
