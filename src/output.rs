//! Output formatting for human and JSON modes
//!
//! Command results render either as colored text or as pretty JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{} {}", "✓".green(), self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Snapshot of the local session
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Configured backend, if any
    pub api_url: Option<String>,
    /// Whether a token is stored
    pub logged_in: bool,
    /// Connected user
    pub user_id: Option<i64>,
    /// Selected project
    pub project_id: Option<i64>,
    /// Active role
    pub role: Option<String>,
    /// Number of stored permissions
    pub permissions: usize,
}

impl StatusReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "API:        {}",
            self.api_url.as_deref().unwrap_or("(not configured)")
        );
        if self.logged_in {
            println!("Session:    {}", "logged in".green());
        } else {
            println!("Session:    {}", "logged out".yellow());
        }
        println!("User:       {}", display_id(self.user_id));
        println!("Project:    {}", display_id(self.project_id));
        println!("Role:       {}", self.role.as_deref().unwrap_or("-"));
        println!("Permissions: {}", self.permissions);
    }
}

/// One line of a listing
#[derive(Debug, Serialize)]
pub struct ListingRow {
    /// Entity id
    pub id: i64,
    /// Main label
    pub label: String,
    /// Secondary information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A titled list of entities
#[derive(Debug, Serialize)]
pub struct Listing {
    /// Heading in human mode
    #[serde(skip)]
    pub title: String,
    /// Rows in display order
    pub rows: Vec<ListingRow>,
}

impl Listing {
    /// Empty listing with a heading
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push(&mut self, id: i64, label: impl Into<String>, detail: Option<String>) {
        self.rows.push(ListingRow {
            id,
            label: label.into(),
            detail,
        });
    }

    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(&self.rows),
        }
    }

    fn render_human(&self) {
        if self.rows.is_empty() {
            println!("No {}.", self.title.to_lowercase());
            return;
        }

        println!("{}:\n", self.title.bold());
        for row in &self.rows {
            match &row.detail {
                Some(detail) => println!("  [{}] {}  {}", row.id, row.label, detail.dimmed()),
                None => println!("  [{}] {}", row.id, row.label),
            }
        }
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}
