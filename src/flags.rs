#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<Flag>,
    ignored: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            Flag {
                name: "help",
                short: "-h",
                long: "--help",
                description: "Print this help message",
                set: false,
            },
            Flag {
                name: "version",
                short: "-V",
                long: "--version",
                description: "Show version information",
                set: false,
            },
            Flag {
                name: "debug",
                short: "-d",
                long: "--debug",
                description: "Enable debug logging on stderr",
                set: false,
            },
        ];

        Flags {
            flags,
            ignored: Vec::new(),
        }
    }

    /// Arguments that match no flag are kept aside, never rejected.
    pub fn parse(&mut self, args: &[String]) {
        for arg in args {
            match self
                .flags
                .iter_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
            {
                Some(flag) => flag.set = true,
                None => self.ignored.push(arg.clone()),
            }
        }
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag.name == name && flag.set)
    }

    pub fn help_text(&self) -> String {
        let mut text = String::from("Usage: funsh [OPTIONS]\n\nOptions:\n");
        for flag in &self.flags {
            text.push_str(&format!(
                "  {}, {:<15} {}\n",
                flag.short, flag.long, flag.description
            ));
        }
        text
    }

    pub fn print_help(&self) {
        print!("{}", self.help_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_flags() {
        let mut flags = Flags::new();
        flags.parse(&[]);
        assert!(flags.ignored().is_empty());
        assert!(!flags.is_set("help"));
        assert!(!flags.is_set("version"));
        assert!(!flags.is_set("debug"));
    }

    #[test]
    fn test_short_and_long() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-d", "--version"]));
        assert!(flags.is_set("debug"));
        assert!(flags.is_set("version"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_unknown_arguments_are_set_aside() {
        let mut flags = Flags::new();
        flags.parse(&args(&["somefile", "--quiet", "-d"]));
        assert_eq!(flags.ignored(), ["somefile", "--quiet"]);
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_help_text_lists_every_flag() {
        let text = Flags::new().help_text();
        assert!(text.starts_with("Usage: funsh [OPTIONS]"));
        for long in ["--help", "--version", "--debug"] {
            assert!(text.contains(long));
        }
    }
}
