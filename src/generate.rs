//! Generate command handler.

use crate::builder::AutoBuilder;
use crate::config::PopulationConfiguration;
use anyhow::Context;
use clap::Args;
use model_core::ModelRegistry;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to the model schema YAML file
    #[arg(long, env = "GRAPHFILL_SCHEMA")]
    pub schema: PathBuf,

    /// Name of the model to generate
    #[arg(long, short = 'm')]
    pub model: String,

    /// Path to a population configuration YAML file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of instances to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum nesting depth (overrides the configuration file)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Items per collection (overrides the configuration file)
    #[arg(long)]
    pub items: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Run the generate command, returning one JSON document per instance.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<Vec<String>> {
    let registry = ModelRegistry::from_file(&args.schema)
        .with_context(|| format!("Failed to load model schema from {:?}", args.schema))?;

    let mut configuration = match &args.config {
        Some(path) => PopulationConfiguration::from_file(path)
            .with_context(|| format!("Failed to load population configuration from {path:?}"))?,
        None => PopulationConfiguration::default(),
    };
    if let Some(max_depth) = args.max_depth {
        configuration.max_depth = max_depth;
    }
    if let Some(items) = args.items {
        configuration.default_collection_item_count = items;
    }

    let mut builder =
        AutoBuilder::for_model(&registry, &args.model).with_configuration(configuration);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }

    tracing::info!("Generating {} {} instance(s)", args.count, args.model);

    let mut documents = Vec::with_capacity(args.count);
    for index in 0..args.count {
        let populated = builder
            .construct()
            .with_context(|| format!("Failed to build {} #{}", args.model, index + 1))?;
        let document = if args.pretty {
            populated.to_json_pretty()?
        } else {
            populated.to_json()?
        };
        documents.push(document);
    }

    tracing::info!("Generated {} document(s)", documents.len());
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCHEMA: &str = r#"
models:
  - name: Person
    properties:
      - name: Name
        type: string
      - name: Count
        type: int
"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(schema: &tempfile::NamedTempFile) -> GenerateArgs {
        GenerateArgs {
            schema: schema.path().to_path_buf(),
            model: "Person".to_string(),
            config: None,
            count: 3,
            seed: Some(42),
            max_depth: None,
            items: None,
            pretty: false,
        }
    }

    #[test]
    fn test_generates_requested_count() {
        let schema = write_temp(SCHEMA);
        let documents = run_generate(&args(&schema)).unwrap();

        assert_eq!(documents.len(), 3);
        for document in &documents {
            let json: serde_json::Value = serde_json::from_str(document).unwrap();
            assert!(json["Name"].is_string());
            assert!(json["Count"].is_i64());
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let schema = write_temp(SCHEMA);
        assert_eq!(
            run_generate(&args(&schema)).unwrap(),
            run_generate(&args(&schema)).unwrap()
        );
    }

    #[test]
    fn test_configuration_file_conventions() {
        let schema = write_temp(SCHEMA);
        let config = write_temp(
            "conventions:\n  - filter: exact\n    pattern: Count\n    type: int\n    value: 42\n",
        );
        let mut args = args(&schema);
        args.config = Some(config.path().to_path_buf());

        for document in run_generate(&args).unwrap() {
            let json: serde_json::Value = serde_json::from_str(&document).unwrap();
            assert_eq!(json["Count"], 42);
        }
    }

    #[test]
    fn test_unknown_model_reports_context() {
        let schema = write_temp(SCHEMA);
        let mut args = args(&schema);
        args.model = "Robot".to_string();

        let err = run_generate(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Robot"));
    }
}
