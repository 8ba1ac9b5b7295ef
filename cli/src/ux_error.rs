use colored::Colorize;

#[derive(Debug)]
pub struct UxError {
    pub what: String,
    pub why: Option<String>,
    pub how_to_fix: Vec<String>,
    pub suggested_command: Option<String>,
}

impl UxError {
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            why: None,
            how_to_fix: Vec::new(),
            suggested_command: None,
        }
    }

    pub fn why(mut self, reason: impl Into<String>) -> Self {
        self.why = Some(reason.into());
        self
    }

    pub fn fix(mut self, suggestion: impl Into<String>) -> Self {
        self.how_to_fix.push(suggestion.into());
        self
    }

    pub fn suggest(mut self, cmd: impl Into<String>) -> Self {
        self.suggested_command = Some(cmd.into());
        self
    }

    pub fn display(&self) {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), self.what.white().bold());

        if let Some(why) = &self.why {
            eprintln!("       {}", why.dimmed());
        }

        if !self.how_to_fix.is_empty() {
            eprintln!();
            eprintln!("{}", "How to fix:".yellow().bold());
            for (i, fix) in self.how_to_fix.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, fix);
            }
        }

        if let Some(cmd) = &self.suggested_command {
            eprintln!();
            eprintln!("{}", "Try this:".green().bold());
            eprintln!("  $ {}", cmd.cyan());
        }
        eprintln!();
    }
}

impl std::fmt::Display for UxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.what)
    }
}

impl std::error::Error for UxError {}

pub fn invalid_settings(reason: &str) -> UxError {
    UxError::new("Could not load wizard settings")
        .why(reason.to_string())
        .fix("Check the file passed with --config (TOML or YAML)")
        .fix("Check METADATA_WIZARD_* environment variables")
        .suggest("metadata-wizard show --endpoint http://localhost:8080")
}

pub fn endpoint_not_set() -> UxError {
    UxError::new("No endpoint base configured")
        .why("Every operation is posted to {endpoint}/{operation}")
        .fix("Pass --endpoint")
        .fix("Or set METADATA_WIZARD_ENDPOINT")
        .suggest("metadata-wizard generate generate_table_description --endpoint http://localhost:8080")
}

pub fn invalid_edit(reason: &str) -> UxError {
    UxError::new("Could not apply form value")
        .why(reason.to_string())
        .fix("Strategy accepts 1, 2, 3 or naive, documented, documented_then_rest")
}

pub fn transport_setup_failed(reason: &str) -> UxError {
    UxError::new("Could not create the HTTP client")
        .why(reason.to_string())
        .fix("Check --timeout-secs")
}

pub fn request_failed(operation: &str) -> UxError {
    UxError::new(format!("{} failed", operation))
        .why("The backend was unreachable or did not return a JSON body")
        .fix("Check the endpoint base address")
        .fix("Run with RUST_LOG=debug to see the underlying error")
}
