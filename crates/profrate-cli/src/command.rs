use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register,
    Login {
        url: String,
    },
    Logout,
    List,
    View,
    Average {
        professor: String,
        module: String,
    },
    Rate {
        professor: String,
        module: String,
        year: String,
        semester: String,
        rating: String,
    },
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A known command with too few arguments; holds the usage line.
    Usage(&'static str),
    Unknown(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Usage(usage) => write!(f, "Usage: {}", usage),
            ParseError::Unknown(_) => {
                write!(f, "Invalid command. Type 'help' for a list of commands.")
            }
        }
    }
}

pub const LOGIN_USAGE: &str = "login <url>";
pub const AVERAGE_USAGE: &str = "average <professor_id> <module_code>";
pub const RATE_USAGE: &str = "rate <professor_id> <module_code> <year> <semester> <rating>";

pub const HELP_TEXT: &str = "\
Available Commands:
'register' - Register a new user
'login <url>' - Login to server URL
'logout' - Logout
'list' - View module instances & professors
'view' - View all professor ratings
'average <professor_id> <module_code>' - View average rating of a professor in a module
'rate <professor_id> <module_code> <year> <semester> <rating>' - Rate a professor
'exit' - Exit the application";

/// Parses one input line. Blank lines yield `Ok(None)`. The command word is
/// case-insensitive; extra arguments are ignored.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(action) = parts.first() else {
        return Ok(None);
    };
    let args = &parts[1..];

    let command = match action.to_lowercase().as_str() {
        "register" => Command::Register,
        "login" => match args {
            [url, ..] => Command::Login {
                url: url.to_string(),
            },
            _ => return Err(ParseError::Usage(LOGIN_USAGE)),
        },
        "logout" => Command::Logout,
        "list" => Command::List,
        "view" => Command::View,
        "average" => match args {
            [professor, module, ..] => Command::Average {
                professor: professor.to_string(),
                module: module.to_string(),
            },
            _ => return Err(ParseError::Usage(AVERAGE_USAGE)),
        },
        "rate" => match args {
            [professor, module, year, semester, rating, ..] => Command::Rate {
                professor: professor.to_string(),
                module: module.to_string(),
                year: year.to_string(),
                semester: semester.to_string(),
                rating: rating.to_string(),
            },
            _ => return Err(ParseError::Usage(RATE_USAGE)),
        },
        "help" => Command::Help,
        "exit" => Command::Exit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}
