use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Save(Option<PathBuf>),
    Select { indices: Vec<usize>, discard: bool },
}

/// Parses one prompt line. Selections are hand positions separated by
/// spaces or commas; a trailing `d` turns the selection into a discard.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err("empty input (type h for help)".to_string()),
        ["q"] | ["quit"] | ["exit"] => Ok(Command::Quit),
        ["h"] | ["help"] | ["?"] => Ok(Command::Help),
        ["s"] | ["save"] => Ok(Command::Save(None)),
        ["s", path] | ["save", path] => Ok(Command::Save(Some(PathBuf::from(*path)))),
        [rest @ .., "d"] => Ok(Command::Select {
            indices: parse_indices(rest)?,
            discard: true,
        }),
        _ => Ok(Command::Select {
            indices: parse_indices(&tokens)?,
            discard: false,
        }),
    }
}

fn parse_indices(args: &[&str]) -> Result<Vec<usize>, String> {
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let idx = part
                .parse::<usize>()
                .map_err(|_| format!("invalid index '{part}'"))?;
            indices.push(idx);
        }
    }
    Ok(indices)
}
