use std::io::{self, BufRead, Write};

use dialoguer::{Input, Password};
use tracing::warn;

use crate::client::{ApiClient, ApiResponse, ClientError};
use crate::command::{Command, HELP_TEXT, parse_command};
use crate::render;

/// Source of credentials for `register` and `login`. Implementations may
/// read from the session's own input and output streams.
pub trait Prompter {
    fn text(
        &mut self,
        label: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<String>;

    fn secret(
        &mut self,
        label: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<String>;
}

/// Reads credentials from the terminal; the password is not echoed.
pub struct DialoguerPrompter;

fn dialoguer_error(err: dialoguer::Error) -> io::Error {
    io::Error::other(err.to_string())
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, label: &str, _: &mut dyn BufRead, _: &mut dyn Write) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .map_err(dialoguer_error)
    }

    fn secret(
        &mut self,
        label: &str,
        _: &mut dyn BufRead,
        _: &mut dyn Write,
    ) -> io::Result<String> {
        Password::new()
            .with_prompt(label)
            .interact()
            .map_err(dialoguer_error)
    }
}

/// Reads credentials as plain lines from the session input. Used when stdin
/// is not a terminal; the password is echoed like any other line.
pub struct StreamPrompter;

impl StreamPrompter {
    fn read_line(
        label: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<String> {
        write!(output, "{}: ", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input for '{}'", label),
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompter for StreamPrompter {
    fn text(
        &mut self,
        label: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<String> {
        Self::read_line(label, input, output)
    }

    fn secret(
        &mut self,
        label: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<String> {
        Self::read_line(label, input, output)
    }
}

struct Credentials {
    username: String,
    password: String,
    email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<P> {
    client: ApiClient,
    prompter: P,
}

impl<P: Prompter> Session<P> {
    pub fn new(client: ApiClient, prompter: P) -> Self {
        Self { client, prompter }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Reads commands until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(
            output,
            "\n===== Professor Rating (Command Line Interface) ====="
        )?;
        writeln!(
            output,
            "Type a command or 'help' for a list of available commands."
        )?;

        let mut line = String::new();
        loop {
            write!(output, "\n>>> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    continue;
                }
            };

            if self.execute(command, &mut input, &mut output)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Runs one command. Prompt and transport failures are reported and the
    /// session carries on; only errors writing `output` end it.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        let text = match command {
            Command::Exit => {
                writeln!(output, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            Command::Help => format!("\n{}", HELP_TEXT),
            Command::Register => {
                writeln!(output, "\n===== Register User =====")?;
                match self.credentials(true, input, output) {
                    Ok(Credentials {
                        username,
                        password,
                        email,
                    }) => report(
                        self.client
                            .register(&username, &password, email.as_deref().unwrap_or_default()),
                        render::register,
                    ),
                    Err(err) => prompt_failed(err),
                }
            }
            Command::Login { url } => {
                self.client.set_base_url(url);
                writeln!(
                    output,
                    "\n===== Logging in to {} =====",
                    self.client.base_url()
                )?;
                match self.credentials(false, input, output) {
                    Ok(Credentials {
                        username, password, ..
                    }) => report(self.client.login(&username, &password), render::login),
                    Err(err) => prompt_failed(err),
                }
            }
            Command::Logout if !self.client.is_logged_in() => "You are not logged in.".to_string(),
            Command::Logout => report(self.client.logout(), render::logout),
            Command::List => {
                writeln!(output, "\n===== List of Module Instances =====")?;
                report(self.client.list(), render::module_instances)
            }
            Command::View => {
                writeln!(output, "\n===== View List of Professor Ratings =====")?;
                report(self.client.view(), render::professor_ratings)
            }
            Command::Average { professor, module } => {
                writeln!(output, "\n===== Professor Module Average Rating =====")?;
                report(
                    self.client.average(&professor, &module),
                    render::professor_average,
                )
            }
            Command::Rate { .. } if !self.client.is_logged_in() => {
                "You must be logged in to rate a professor.".to_string()
            }
            Command::Rate {
                professor,
                module,
                year,
                semester,
                rating,
            } => {
                writeln!(output, "\n===== Rate a Professor =====")?;
                report(
                    self.client
                        .rate(&professor, &module, &year, &semester, &rating),
                    render::rating_submission,
                )
            }
        };

        writeln!(output, "{}", text)?;
        Ok(Flow::Continue)
    }

    fn credentials<R: BufRead, W: Write>(
        &mut self,
        with_email: bool,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Credentials> {
        let username = self.prompter.text("Enter username", input, output)?;
        let password = self.prompter.secret("Enter password", input, output)?;
        let email = if with_email {
            Some(self.prompter.text("Enter email", input, output)?)
        } else {
            None
        };
        Ok(Credentials {
            username,
            password,
            email,
        })
    }
}

fn prompt_failed(err: io::Error) -> String {
    warn!(error = %err, "Prompt failed");
    format!("Error: {}", err)
}

fn report(
    result: Result<ApiResponse, ClientError>,
    render: fn(&ApiResponse) -> String,
) -> String {
    match result {
        Ok(response) => render(&response),
        Err(err) => {
            warn!(error = %err, "Request failed");
            format!("Error: {}", err)
        }
    }
}
