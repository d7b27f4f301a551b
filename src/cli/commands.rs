//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{InputSource, Notation};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{DigitList, IslandSearch};
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e).into());
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let settings = Settings::load(Some(&project_dir))?;
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Levels { tree, file, draw } => {
            cmd_levels(&container, pick_source(tree, file)?, *draw)
        }
        Commands::Add {
            left,
            right,
            numbers,
        } => cmd_add(&container, left, right, *numbers),
        Commands::Islands {
            grid,
            file,
            search,
            sizes,
        } => cmd_islands(&container, pick_source(grid, file)?, *search, *sizes),
        Commands::Config { command } => cmd_config(&container, command, &project_dir),
        Commands::Completion { .. } => Ok(()),
    }
}

fn resolve_project_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(|e| InfraError::io("current directory", e).into()),
    }
}

/// `--file` wins over the positional literal.
fn pick_source(positional: &Option<InputSource>, file: &Option<PathBuf>) -> CliResult<InputSource> {
    match (positional, file) {
        (_, Some(path)) => Ok(InputSource::File(path.clone())),
        (Some(source), None) => Ok(source.clone()),
        (None, None) => Err(CliError::Usage(
            "provide an inline literal or --file".to_string(),
        )),
    }
}

#[instrument(skip(container))]
fn cmd_levels(container: &ServiceContainer, source: InputSource, draw: bool) -> CliResult<()> {
    let report = container.algorithms.levels(&source)?;
    debug!("tree has {} nodes", report.tree.len());

    if draw || container.settings.levels.show_tree {
        output::info(&report.tree.to_term_tree());
    }
    if report.levels.is_empty() {
        output::warning("empty tree: no levels");
    }
    for line in output::format_levels(&report.levels, container.settings.output.style) {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_add(
    container: &ServiceContainer,
    left: &InputSource,
    right: &InputSource,
    numbers: bool,
) -> CliResult<()> {
    let notation = if numbers {
        Notation::Number
    } else {
        Notation::Digits
    };
    let report = container.algorithms.add(left, right, notation)?;
    let style = container.settings.output.style;

    output::info(&output::format_digits(report.sum.as_ref(), style));
    if let Some(sum) = &report.sum {
        let operand = |list: Option<&DigitList>| {
            list.map(|l| l.to_decimal_string())
                .unwrap_or_else(|| "0".to_string())
        };
        output::detail(&format!(
            "{} + {} = {}",
            operand(report.left.as_ref()),
            operand(report.right.as_ref()),
            sum.to_decimal_string()
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_islands(
    container: &ServiceContainer,
    source: InputSource,
    search: Option<IslandSearch>,
    sizes: bool,
) -> CliResult<()> {
    let report = container.algorithms.islands(&source, search)?;
    debug!(
        "{}x{} grid, {} search",
        report.grid.rows(),
        report.grid.cols(),
        report.search
    );

    output::info(&report.count);
    if sizes {
        for (i, size) in report.sizes.iter().enumerate() {
            output::detail(&format!("island {}: {} cells", i + 1, size));
        }
    }
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    project_dir: &Path,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            output::action("local", &local_config_path(project_dir).display());
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no global config directory on this platform".to_string())
            })?;
            if container.write_config_template(&path)? {
                output::success(&format!("wrote {}", path.display()));
            } else {
                output::warning(&format!("{} already exists", path.display()));
            }
        }
        ConfigCommands::Template => {
            output::info(&Settings::template());
        }
    }
    Ok(())
}
