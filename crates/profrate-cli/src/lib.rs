//! # Profrate CLI
//!
//! Interactive client for the professor rating service. Each command maps
//! to exactly one HTTP request; responses are rendered as plain text.
//!
//! - [`command`]: Parsing a line of input into a [`command::Command`]
//! - [`client`]: Blocking HTTP client holding the base URL and token
//! - [`render`]: Turning responses into terminal output
//! - [`session`]: The read-eval-print loop. Credentials come from the
//!   terminal, or from stdin itself when it is not a terminal
//!
//! ## Usage
//!
//! ```ignore
//! use profrate_cli::client::ApiClient;
//! use profrate_cli::session::{DialoguerPrompter, Session};
//!
//! let client = ApiClient::new("http://127.0.0.1:8000")?;
//! let mut session = Session::new(client, DialoguerPrompter);
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

pub mod client;
pub mod command;
pub mod render;
pub mod session;

pub use client::{ApiClient, ApiResponse, ClientError};
pub use command::{Command, ParseError, parse_command};
pub use session::{DialoguerPrompter, Prompter, Session, StreamPrompter};

/// Server the client talks to until `login <url>` says otherwise.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
