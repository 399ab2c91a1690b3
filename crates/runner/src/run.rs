//! Demo scenario: muster one unit for a faction and place it on the map.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use muster_domain::{create_unit, create_unit_factory, Position, UnitSnapshot};
use serde::Serialize;

use crate::config::{OutputFormat, RunnerConfig};

/// Raw ids as entered by the player: faction (England 0, France 1) and
/// unit type (infantryman 0, archer 1, knight 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusterRequest {
    pub faction_id: i32,
    pub unit_id: i32,
}

impl MusterRequest {
    /// Takes the ids from the first two arguments, or reads them from `input`
    /// when no arguments were given.
    pub fn parse(args: &[String], input: impl BufRead) -> Result<Self> {
        let tokens: Vec<String> = if args.is_empty() {
            let mut tokens = Vec::new();
            for line in input.lines() {
                let line = line.context("reading ids from stdin")?;
                tokens.extend(line.split_whitespace().map(str::to_string));
                if tokens.len() >= 2 {
                    break;
                }
            }
            tokens
        } else {
            args.to_vec()
        };

        let mut tokens = tokens.iter();
        let faction_id = next_id(&mut tokens, "faction id")?;
        let unit_id = next_id(&mut tokens, "unit type id")?;
        Ok(Self {
            faction_id,
            unit_id,
        })
    }
}

fn next_id<'a>(tokens: &mut impl Iterator<Item = &'a String>, what: &str) -> Result<i32> {
    let raw = tokens
        .next()
        .with_context(|| format!("missing {what}"))?;
    raw.trim()
        .parse()
        .with_context(|| format!("{what} must be an integer, got {raw:?}"))
}

/// The unit as it came out of the factory, and after placement.
#[derive(Debug, Clone, Serialize)]
pub struct MusterReport {
    pub created: UnitSnapshot,
    pub placed: UnitSnapshot,
}

/// Builds the faction's factory, creates the unit, and sets its start square.
pub fn muster(request: MusterRequest, start_square: Position) -> Result<MusterReport> {
    let factory = create_unit_factory(request.faction_id)
        .context("selecting unit factory")?;
    tracing::debug!(faction = %factory.faction(), "Unit factory selected");

    let mut unit = create_unit(request.unit_id, factory.as_ref())
        .context("creating unit")?;
    tracing::info!(
        unit_id = %unit.id(),
        unit_type = unit.kind().type_id(),
        faction = %factory.faction(),
        "Unit mustered"
    );
    let created = unit.snapshot();

    unit.set_start_square(start_square);
    tracing::info!(unit_id = %unit.id(), square = %start_square, "Unit placed on start square");

    Ok(MusterReport {
        created,
        placed: unit.snapshot(),
    })
}

/// Writes the report in the requested format.
pub fn render(report: &MusterReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let created = &report.created;
            writeln!(out, "{}", created.class_skill)?;
            writeln!(out, "{}", created.special_skill)?;
            writeln!(out, "Location: {}", created.location)?;
            writeln!(
                out,
                "Damage and Speed: {} {}",
                created.stats.damage, created.stats.speed
            )?;
            writeln!(out, "New Location: {}", report.placed.location)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report).context("serializing report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn run(
    config: &RunnerConfig,
    args: &[String],
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    tracing::debug!(
        start_square = %config.start_square,
        output = %config.output,
        "Runner configured"
    );

    let request = MusterRequest::parse(args, input)?;
    let report = muster(request, config.start_square)?;
    render(&report, config.output, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_domain::DomainError;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_prefers_arguments() {
        let request = MusterRequest::parse(&args(&["1", "2"]), "0 0\n".as_bytes())
            .expect("valid arguments");
        assert_eq!(
            request,
            MusterRequest {
                faction_id: 1,
                unit_id: 2,
            }
        );
    }

    #[test]
    fn parse_reads_stdin_across_lines() {
        let request = MusterRequest::parse(&[], "0\n  1\n".as_bytes()).expect("valid stdin");
        assert_eq!(
            request,
            MusterRequest {
                faction_id: 0,
                unit_id: 1,
            }
        );
    }

    #[test]
    fn parse_rejects_missing_or_non_numeric_ids() {
        assert!(MusterRequest::parse(&[], "0\n".as_bytes()).is_err());
        assert!(MusterRequest::parse(&args(&["england", "1"]), "".as_bytes()).is_err());
    }

    #[test]
    fn muster_places_unit_on_start_square() {
        let report = muster(
            MusterRequest {
                faction_id: 1,
                unit_id: 2,
            },
            Position::new(5, 5),
        )
        .expect("france knight");

        assert_eq!(report.created.type_id, "france_knight");
        assert_eq!(report.created.location, Position::UNPLACED);
        assert_eq!(report.placed.location, Position::new(5, 5));
        assert_eq!(report.created.id, report.placed.id);
    }

    #[test]
    fn muster_reports_unknown_ids() {
        let err = muster(
            MusterRequest {
                faction_id: 4,
                unit_id: 0,
            },
            Position::new(5, 5),
        )
        .expect_err("unknown faction");
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::UnknownFaction(4))
        );

        let err = muster(
            MusterRequest {
                faction_id: 0,
                unit_id: 9,
            },
            Position::new(5, 5),
        )
        .expect_err("unknown unit type");
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::UnknownUnitRole(9))
        );
    }

    #[test]
    fn render_text_matches_demo_transcript() {
        let report = muster(
            MusterRequest {
                faction_id: 0,
                unit_id: 1,
            },
            Position::new(5, 5),
        )
        .expect("england archer");

        let mut out = Vec::new();
        render(&report, OutputFormat::Text, &mut out).expect("render text");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(
            text,
            "ArcherSkill\n\
             EnglandArcherSkill\n\
             Location: -1 -1\n\
             Damage and Speed: 3 3\n\
             New Location: 5 5\n"
        );
    }

    #[test]
    fn run_reads_stdin_and_uses_configured_square() {
        let config = RunnerConfig {
            start_square: Position::new(7, 2),
            output: OutputFormat::Text,
        };

        let mut out = Vec::new();
        run(&config, &[], "1 2\n".as_bytes(), &mut out).expect("france knight");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(
            text,
            "KnightSkill\n\
             FranceKnightSkill\n\
             Location: -1 -1\n\
             Damage and Speed: 6 5\n\
             New Location: 7 2\n"
        );
    }

    #[test]
    fn run_writes_json_when_configured() {
        let config = RunnerConfig {
            output: OutputFormat::Json,
            ..RunnerConfig::default()
        };

        let mut out = Vec::new();
        run(&config, &args(&["0", "2"]), "".as_bytes(), &mut out).expect("england knight");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(json["created"]["type_id"], "standard_knight");
        assert_eq!(json["placed"]["location"]["x"], 5);
        assert_eq!(json["placed"]["location"]["y"], 5);
    }

    #[test]
    fn run_fails_on_unknown_faction() {
        let mut out = Vec::new();
        let err = run(&RunnerConfig::default(), &args(&["3", "0"]), "".as_bytes(), &mut out)
            .expect_err("unknown faction");
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::UnknownFaction(3))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn render_json_contains_both_snapshots() {
        let report = muster(
            MusterRequest {
                faction_id: 0,
                unit_id: 0,
            },
            Position::new(1, 2),
        )
        .expect("england infantryman");

        let mut out = Vec::new();
        render(&report, OutputFormat::Json, &mut out).expect("render json");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(json["created"]["type_id"], "standard_infantryman");
        assert_eq!(json["created"]["location"]["x"], -1);
        assert_eq!(json["placed"]["location"]["x"], 1);
        assert_eq!(json["placed"]["location"]["y"], 2);
    }
}
