//! Algorithm service
//!
//! Loads inputs (inline literals or files through the filesystem boundary),
//! builds the domain structures and runs the algorithms over them.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{
    ApplicationError, ApplicationResult, InputSource, IoResultExt, Notation,
};
use crate::config::Settings;
use crate::domain::{
    add_two_digit_chains, island_sizes, BinaryTree, DigitList, Grid, IslandSearch,
};
use crate::infrastructure::traits::FileSystem;

/// Result of a level-order traversal.
#[derive(Debug, Clone)]
pub struct LevelReport {
    pub tree: BinaryTree,
    pub levels: Vec<Vec<i64>>,
}

/// Result of adding two digit chains.
#[derive(Debug, Clone)]
pub struct SumReport {
    pub left: Option<DigitList>,
    pub right: Option<DigitList>,
    /// `None` when both operands were absent
    pub sum: Option<DigitList>,
}

/// Result of counting islands.
#[derive(Debug, Clone)]
pub struct IslandReport {
    pub grid: Grid,
    pub search: IslandSearch,
    pub count: usize,
    /// Island sizes in discovery order
    pub sizes: Vec<usize>,
}

/// Service running the three algorithms on loaded inputs.
pub struct AlgorithmService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl AlgorithmService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Raw text of an input; relative file paths resolve against `input_dir`.
    ///
    /// Paths that do not name a regular file (missing, or a directory) are
    /// reported as missing input.
    #[instrument(level = "debug", skip(self))]
    pub fn read_input(&self, source: &InputSource) -> ApplicationResult<String> {
        match source {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let path = self.settings.resolve_input(path);
                if !self.fs.is_file(&path) {
                    return Err(ApplicationError::MissingInput(path));
                }
                let content = self
                    .fs
                    .read_to_string(&path)
                    .with_path_context("read input", &path)?;
                debug!("read {} bytes from {}", content.len(), path.display());
                Ok(content)
            }
        }
    }

    pub fn load_tree(&self, source: &InputSource) -> ApplicationResult<BinaryTree> {
        Ok(self.read_input(source)?.parse::<BinaryTree>()?)
    }

    /// Loads one operand; blank input or `null` is an absent chain.
    pub fn load_digits(
        &self,
        source: &InputSource,
        notation: Notation,
    ) -> ApplicationResult<Option<DigitList>> {
        let text = self.read_input(source)?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
            return Ok(None);
        }
        let list = match notation {
            Notation::Digits => trimmed.parse::<DigitList>()?,
            Notation::Number => DigitList::from_number_str(trimmed)?,
        };
        Ok((!list.is_empty()).then_some(list))
    }

    pub fn load_grid(&self, source: &InputSource) -> ApplicationResult<Grid> {
        Ok(self.read_input(source)?.parse::<Grid>()?)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn levels(&self, source: &InputSource) -> ApplicationResult<LevelReport> {
        let tree = self.load_tree(source)?;
        let levels = tree.level_order();
        Ok(LevelReport { tree, levels })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add(
        &self,
        left: &InputSource,
        right: &InputSource,
        notation: Notation,
    ) -> ApplicationResult<SumReport> {
        let left = self.load_digits(left, notation)?;
        let right = self.load_digits(right, notation)?;
        let sum = add_two_digit_chains(left.as_ref(), right.as_ref());
        Ok(SumReport { left, right, sum })
    }

    /// Counts islands; `search` falls back to the configured strategy.
    #[instrument(level = "debug", skip(self))]
    pub fn islands(
        &self,
        source: &InputSource,
        search: Option<IslandSearch>,
    ) -> ApplicationResult<IslandReport> {
        let grid = self.load_grid(source)?;
        let search = search.unwrap_or(self.settings.islands.search);
        let sizes = island_sizes(&grid, search);
        Ok(IslandReport {
            count: sizes.len(),
            grid,
            search,
            sizes,
        })
    }
}
