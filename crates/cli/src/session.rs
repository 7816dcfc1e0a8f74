//! Interactive exploration. A session keeps one [Explorer] alive for all of
//! its commands, so the random stream carries over from one explore to the
//! next just like it does in a long-running UI.

use crate::{App, BiomeArg, FogMode};
use anyhow::{anyhow, bail, Context};
use hexplore::{Biome, Explorer, HexPoint, Survey};
use log::{debug, info};
use std::io::BufRead;

const HELP: &str = "\
commands:
  start <col,row>
  explore <col,row> <biome> [feature]
  edit <col,row> <biome|Unexplored> [feature]
  show <col,row>
  visible
  fog [on|off]
  save
  quit";

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Start(HexPoint),
    Explore(HexPoint, Biome, String),
    Edit(HexPoint, Option<Biome>, String),
    Show(HexPoint),
    Visible,
    Fog(Option<FogMode>),
    Save,
    Help,
    Quit,
}

/// Run commands from `input` until it runs dry or a `quit` comes in. A bad
/// line is reported and skipped rather than ending the session. The caller
/// saves the collection afterwards.
pub fn run(
    app: &mut App,
    mut explorer: Explorer,
    input: impl BufRead,
) -> anyhow::Result<()> {
    info!("Session started, type `help` for commands");
    for (i, line) in input.lines().enumerate() {
        let line = line.context("error reading input")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("Error on line {}: {:#}", i + 1, err);
                continue;
            }
        };
        debug!("Running {:?}", command);

        let result = match command {
            SessionCommand::Start(point) => app.start(&mut explorer, point),
            SessionCommand::Explore(point, biome, feature) => {
                let survey = Survey {
                    feature,
                    ..Survey::new(biome)
                };
                app.explore(&mut explorer, point, survey)
            }
            SessionCommand::Edit(point, biome, feature) => {
                app.edit(point, Some(BiomeArg(biome)), Some(feature), None)
            }
            SessionCommand::Show(point) => app.show(point),
            SessionCommand::Visible => app.visible(),
            SessionCommand::Fog(mode) => {
                app.fog(mode);
                Ok(())
            }
            SessionCommand::Save => app.save(),
            SessionCommand::Help => {
                println!("{}", HELP);
                Ok(())
            }
            SessionCommand::Quit => break,
        };
        if let Err(err) = result {
            eprintln!("Error on line {}: {:#}", i + 1, err);
        }
    }
    Ok(())
}

/// Parse one line of input. Blank lines and `#` comments are `None`.
fn parse_line(line: &str) -> anyhow::Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.splitn(2, char::is_whitespace);
    let name = words.next().unwrap_or_default();
    let rest = words.next().unwrap_or_default().trim();
    let mut args = rest.splitn(3, char::is_whitespace);
    let mut point = || -> anyhow::Result<HexPoint> {
        args.next()
            .filter(|arg| !arg.is_empty())
            .ok_or_else(|| anyhow!("`{}` needs a hex like 5,5", name))?
            .parse()
    };

    let command = match name {
        "start" => SessionCommand::Start(point()?),
        "show" => SessionCommand::Show(point()?),
        "explore" | "edit" => {
            let point = point()?;
            let biome: BiomeArg = args
                .next()
                .ok_or_else(|| anyhow!("{} needs a biome", name))?
                .parse()?;
            let feature = args.next().unwrap_or_default().trim().to_owned();
            match (name, biome.0) {
                ("explore", Some(biome)) => {
                    SessionCommand::Explore(point, biome, feature)
                }
                ("explore", None) => bail!("can't explore as Unexplored"),
                (_, biome) => SessionCommand::Edit(point, biome, feature),
            }
        }
        "visible" => SessionCommand::Visible,
        "fog" => match rest {
            "" => SessionCommand::Fog(None),
            mode => {
                let mode = mode
                    .parse()
                    .map_err(|_| anyhow!("unknown fog mode {:?}", mode))?;
                SessionCommand::Fog(Some(mode))
            }
        },
        "save" => SessionCommand::Save,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command {:?}", other),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_explore() {
        assert_eq!(
            parse("explore 5,5 Forest"),
            SessionCommand::Explore(
                HexPoint::new(5, 5),
                Biome::Forest,
                String::new()
            )
        );
        // Feature is the rest of the line, spaces and all
        assert_eq!(
            parse("  explore 0,11 Swamp Witch's Hut, Bog Iron Mine "),
            SessionCommand::Explore(
                HexPoint::new(0, 11),
                Biome::Swamp,
                "Witch's Hut, Bog Iron Mine".into()
            )
        );
        assert!(parse_line("explore 5,5 Unexplored").is_err());
        assert!(parse_line("explore 5,5").is_err());
        assert!(parse_line("explore").is_err());
    }

    #[test]
    fn test_parse_edit() {
        assert_eq!(
            parse("edit 1,2 unexplored"),
            SessionCommand::Edit(HexPoint::new(1, 2), None, String::new())
        );
        assert_eq!(
            parse("edit 1,2 Hills Watchtower"),
            SessionCommand::Edit(
                HexPoint::new(1, 2),
                Some(Biome::Hills),
                "Watchtower".into()
            )
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# a comment").unwrap(), None);
        assert_eq!(
            parse("start 3,4"),
            SessionCommand::Start(HexPoint::new(3, 4))
        );
        assert_eq!(parse("fog"), SessionCommand::Fog(None));
        assert_eq!(parse("fog on"), SessionCommand::Fog(Some(FogMode::On)));
        assert!(parse_line("fog maybe").is_err());
        assert_eq!(parse("quit"), SessionCommand::Quit);
        assert!(parse_line("dance 1,1").is_err());
        assert!(parse_line("show 1").is_err());
    }
}
