//! Command parsing for the interactive loop.

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Login,
    Register,
    Logout,
    List,
    New,
    Edit(i64),
    Delete(i64),
    Whoami,
    Quit,
}

impl Command {
    /// Parse a line of input. Empty lines are `None`; anything
    /// unrecognized is an error message for the user.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "login" => Command::Login,
            "register" => Command::Register,
            "logout" => Command::Logout,
            "list" | "ls" => Command::List,
            "new" => Command::New,
            "edit" => Command::Edit(parse_id(parts.next(), "edit")?),
            "delete" | "rm" => Command::Delete(parse_id(parts.next(), "delete")?),
            "whoami" => Command::Whoami,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help' for a list.")),
        };

        if parts.next().is_some() {
            return Err(format!("Too many arguments for '{head}'."));
        }
        Ok(Some(command))
    }
}

fn parse_id(arg: Option<&str>, name: &str) -> Result<i64, String> {
    let Some(raw) = arg else {
        return Err(format!("Usage: {name} <post id>"));
    };
    raw.parse::<i64>()
        .map_err(|_| format!("'{raw}' is not a post id."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("  quit ").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("LOGIN").unwrap(), Some(Command::Login));
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(Command::parse("ls").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("rm 3").unwrap(), Some(Command::Delete(3)));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
    }

    #[test]
    fn parses_commands_with_ids() {
        assert_eq!(Command::parse("edit 12").unwrap(), Some(Command::Edit(12)));
        assert_eq!(Command::parse("delete 5").unwrap(), Some(Command::Delete(5)));
    }

    #[test]
    fn empty_line_is_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn missing_or_bad_ids_are_errors() {
        assert!(Command::parse("edit").is_err());
        assert!(Command::parse("delete five").is_err());
    }

    #[test]
    fn unknown_commands_and_extra_args_are_errors() {
        assert!(Command::parse("dance").is_err());
        assert!(Command::parse("list everything").is_err());
    }
}
