use colored::Colorize;
use wizard_core::Field;

pub fn subheader(title: &str) {
    println!("{}", title.bold());
}

pub fn info(msg: &str) {
    eprintln!("{} {}", "info:".blue().bold(), msg);
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green().bold(), msg);
}

/// Stderr note listing fields the operation usually needs but that are empty.
pub fn missing_fields(operation: &str, fields: &[Field]) {
    if fields.is_empty() {
        return;
    }
    let names: Vec<String> = fields.iter().map(|f| f.path()).collect();
    warn(&format!("{} is missing: {}", operation, names.join(", ")));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subheader_does_not_panic() {
        subheader("Test Subheader");
    }

    #[test]
    fn test_info_does_not_panic() {
        info("This is info");
    }

    #[test]
    fn test_warn_does_not_panic() {
        warn("This is a warning");
    }

    #[test]
    fn test_success_does_not_panic() {
        success("This is success");
    }

    #[test]
    fn test_missing_fields_does_not_panic() {
        missing_fields("generate_table_description", &[Field::TableId]);
        missing_fields("generate_table_description", &[]);
    }
}
