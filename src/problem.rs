use crate::{
    attribute::{AttrId, Dependencies, Schema},
    fd::{FdSet, FunctionalDependency},
};
use anyhow::{Context, Result};
use glob::glob;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, time::Instant};

/// A relation schema together with the dependencies that govern it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub name: String,
    pub schema: Schema,
    pub dependencies: Dependencies,
}

impl Problem {
    pub fn new(
        name: impl Into<String>,
        schema: Schema,
        dependencies: impl IntoIterator<Item = FunctionalDependency<AttrId>>,
    ) -> Result<Self> {
        let name = name.into();
        let dependencies = FdSet::validated(&schema, dependencies)
            .with_context(|| format!("invalid problem `{name}`"))?;
        Ok(Self {
            name,
            schema,
            dependencies,
        })
    }

    /// Load a problem from a JSON file. The name defaults to the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        #[derive(Debug, Deserialize)]
        struct RawProblem {
            name: Option<String>,
            schema: Schema,
            #[serde(default)]
            dependencies: Vec<FunctionalDependency<AttrId>>,
        }

        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let raw: RawProblem = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let name = match raw.name {
            Some(name) => name,
            None => path
                .file_stem()
                .context("problem file has no name")?
                .to_string_lossy()
                .to_string(),
        };

        Self::new(name, raw.schema, raw.dependencies)
    }

    /// Load every `*.json` problem in `dir`, sorted by name.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Self>> {
        let begin = Instant::now();
        let dir = dir.as_ref();
        info!("load problems from {}...", dir.display());

        let mut ans = Vec::new();
        for f in glob(&dir.join("*.json").to_string_lossy())? {
            ans.push(Self::load(f?)?);
        }
        ans.sort_by(|a, b| a.name.cmp(&b.name));

        info!("loaded {} problems in {:?}", ans.len(), Instant::now() - begin);
        Ok(ans)
    }
}
