/// One ipset subcommand with its positional arguments.
///
/// `options` are extra tokens appended verbatim after the positional
/// arguments, normally as key/value pairs (`["timeout", "300"]`). They are
/// not validated here; a malformed list is rejected by ipset itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetCommand<'a> {
    Create { name: &'a str, kind: &'a str, options: &'a [&'a str] },
    Add { name: &'a str, entry: &'a str, options: &'a [&'a str] },
    /// `add` with `-exist`, so re-adding an entry is not an error.
    AddUnique { name: &'a str, entry: &'a str, options: &'a [&'a str] },
    Delete { name: &'a str, entry: &'a str, options: &'a [&'a str] },
    Test { name: &'a str, entry: &'a str, options: &'a [&'a str] },
    Destroy { name: &'a str },
    DestroyAll,
    Save { name: &'a str, file: &'a str },
    SaveAll { file: &'a str },
    Restore { file: &'a str },
    Flush { name: &'a str },
    FlushAll,
    Rename { from: &'a str, to: &'a str },
    Swap { from: &'a str, to: &'a str },
    List { name: &'a str },
}

impl<'a> SetCommand<'a> {
    pub fn subcommand(&self) -> &'static str {
        match self {
            SetCommand::Create { .. } => "create",
            SetCommand::Add { .. } | SetCommand::AddUnique { .. } => "add",
            SetCommand::Delete { .. } => "del",
            SetCommand::Test { .. } => "test",
            SetCommand::Destroy { .. } | SetCommand::DestroyAll => "destroy",
            SetCommand::Save { .. } | SetCommand::SaveAll { .. } => "save",
            SetCommand::Restore { .. } => "restore",
            SetCommand::Flush { .. } | SetCommand::FlushAll => "flush",
            SetCommand::Rename { .. } => "rename",
            SetCommand::Swap { .. } => "swap",
            SetCommand::List { .. } => "list",
        }
    }

    /// Argument vector passed to the binary, subcommand first.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<&str> = vec![self.subcommand()];
        match *self {
            SetCommand::Create { name, kind, options } => {
                args.extend([name, kind]);
                args.extend_from_slice(options);
            }
            SetCommand::Add { name, entry, options }
            | SetCommand::Delete { name, entry, options }
            | SetCommand::Test { name, entry, options } => {
                args.extend([name, entry]);
                args.extend_from_slice(options);
            }
            SetCommand::AddUnique { name, entry, options } => {
                args.extend([name, entry, "-exist"]);
                args.extend_from_slice(options);
            }
            SetCommand::Destroy { name } | SetCommand::Flush { name } | SetCommand::List { name } => {
                args.push(name);
            }
            SetCommand::Save { name, file } => args.extend([name, "-file", file]),
            SetCommand::SaveAll { file } | SetCommand::Restore { file } => {
                args.extend(["-file", file]);
            }
            SetCommand::Rename { from, to } | SetCommand::Swap { from, to } => {
                args.extend([from, to]);
            }
            SetCommand::DestroyAll | SetCommand::FlushAll => {}
        }
        args.into_iter().map(String::from).collect()
    }
}
