pub mod local;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::{ConfigProvider, ParsePolicy};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_file_extension, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    pub const DEFAULT_INPUT_PATH: &str = "Data/2.txt";

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "report-safety", version)]
    #[command(about = "Counts safe reports, with and without the dampener")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_INPUT_PATH)]
        pub input: String,

        #[arg(long, value_enum, default_value_t = ParsePolicy::Abort)]
        pub on_parse_error: ParsePolicy,

        #[arg(long, help = "Write per-report outcomes to this CSV file")]
        pub report_csv: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        pub json: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,
    }

    impl Default for CliConfig {
        fn default() -> Self {
            Self {
                input: DEFAULT_INPUT_PATH.to_string(),
                on_parse_error: ParsePolicy::Abort,
                report_csv: None,
                json: false,
                verbose: false,
                monitor: false,
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn parse_policy(&self) -> ParsePolicy {
            self.on_parse_error
        }

        fn report_csv(&self) -> Option<&str> {
            self.report_csv.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            if let Some(csv_path) = &self.report_csv {
                validate_path("report_csv", csv_path)?;
                validate_file_extension("report_csv", csv_path, &["csv"])?;
            }
            Ok(())
        }
    }

}
