//! This module provides a parser for the DIMACS CNF file format. The input is read line by line:
//!  - lines starting with `c` are comments and blank lines are skipped,
//!  - lines starting with `p` are skipped, the counts of a `p cnf <variables> <clauses>` header
//!    are kept to report on the parsed formula,
//!  - a line starting with `%` ends the clause data,
//!  - every other line holds exactly one clause, terminated by the first `0` on that line.
//!
//! The parsed clauses are handed to a type implementing [`DimacsSink`], which serves as an
//! interface between the parser and the consumer of the parsed contents of the file.
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::str::FromStr;

use dpll_core::basic_types::Literal;
use dpll_core::ClauseDatabase;
use log::debug;
use log::warn;
use thiserror::Error;

/// A dimacs sink stores the clauses which are read from a DIMACS source.
pub(crate) trait DimacsSink {
    /// The underlying formula type.
    type Formula;

    /// Create an empty formula.
    fn empty() -> Self;

    /// Add a new clause to the formula.
    fn add_clause(&mut self, clause: &[Literal]);

    /// Take the collected clauses and turn it into the underlying formula type.
    fn into_formula(self) -> Self::Formula;
}

#[derive(Debug, Error)]
pub(crate) enum DimacsParseError {
    #[error("failed to read the input: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{literal}' on line {line} is an invalid DIMACS literal")]
    InvalidLiteral { literal: String, line: usize },

    #[error("line {line} does not contain any literals")]
    EmptyClause { line: usize },
}

pub(crate) fn parse_cnf<Sink: DimacsSink>(
    source: impl Read,
) -> Result<Sink::Formula, DimacsParseError> {
    let reader = BufReader::new(source);

    let mut sink = Sink::empty();
    let mut header: Option<CnfHeader> = None;
    let mut clause = vec![];
    let mut parsed_clauses = 0;

    // Lines are only decoded once they are known to hold a header or a clause, comments may
    // contain arbitrary bytes.
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = line.trim_ascii();
        let line_number = index + 1;

        match line.first().copied() {
            None | Some(b'c') => continue,
            Some(b'%') => {
                debug!("Clause data terminated on line {line_number}");
                break;
            }
            Some(b'p') => {
                match (header.is_some(), decode_header(line)) {
                    (false, Ok(parsed)) => header = Some(parsed),
                    (true, Ok(_)) => warn!("Skipping repeated header on line {line_number}"),
                    (_, Err(e)) => warn!("Skipping line {line_number}: {e}"),
                }
                continue;
            }
            Some(_) => {}
        }

        let line = std::str::from_utf8(line).map_err(|_| DimacsParseError::InvalidLiteral {
            literal: String::from_utf8_lossy(line).into_owned(),
            line: line_number,
        })?;

        parse_clause(line, line_number, &mut clause)?;
        sink.add_clause(&clause);
        parsed_clauses += 1;
    }

    match header {
        Some(header) => {
            if header.num_clauses != parsed_clauses {
                warn!(
                    "The header announces {} clauses, but {parsed_clauses} were parsed",
                    header.num_clauses
                );
            }

            debug!(
                "Parsed {parsed_clauses} clauses, the header announces {} variables",
                header.num_variables
            );
        }
        None => debug!("Parsed {parsed_clauses} clauses from a source without header"),
    }

    Ok(sink.into_formula())
}

/// Read the literals on a single clause line into `clause`. Everything after the first `0` is
/// ignored, and a line which is not terminated by a `0` still forms a clause.
fn parse_clause(
    line: &str,
    line_number: usize,
    clause: &mut Vec<Literal>,
) -> Result<(), DimacsParseError> {
    clause.clear();

    for token in line.split_whitespace() {
        let invalid_literal = || DimacsParseError::InvalidLiteral {
            literal: token.to_owned(),
            line: line_number,
        };

        let code = token.parse::<i32>().map_err(|_| invalid_literal())?;
        if code == 0 {
            break;
        }

        clause.push(Literal::try_from(code).map_err(|_| invalid_literal())?);
    }

    if clause.is_empty() {
        return Err(DimacsParseError::EmptyClause { line: line_number });
    }

    Ok(())
}

/// A header line which does not have the shape `p cnf <variables> <clauses>`. Such lines are
/// skipped.
#[derive(Debug, Error)]
#[error("'{0}' is not a 'p cnf <variables> <clauses>' header")]
struct InvalidHeader(String);

fn decode_header(line: &[u8]) -> Result<CnfHeader, InvalidHeader> {
    std::str::from_utf8(line)
        .map_err(|_| InvalidHeader(String::from_utf8_lossy(line).into_owned()))?
        .parse()
}

#[derive(Debug)]
struct CnfHeader {
    num_variables: usize,
    num_clauses: usize,
}

impl FromStr for CnfHeader {
    type Err = InvalidHeader;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split_whitespace();

        if components.next() != Some("p") || components.next() != Some("cnf") {
            return Err(InvalidHeader(s.to_owned()));
        }

        let num_variables = next_header_component::<usize>(&mut components, s)?;
        let num_clauses = next_header_component::<usize>(&mut components, s)?;

        if components.next().is_some() {
            return Err(InvalidHeader(s.to_owned()));
        }

        Ok(Self {
            num_variables,
            num_clauses,
        })
    }
}

fn next_header_component<'a, Num: FromStr>(
    components: &mut impl Iterator<Item = &'a str>,
    header: &str,
) -> Result<Num, InvalidHeader> {
    components
        .next()
        .ok_or_else(|| InvalidHeader(header.to_owned()))?
        .parse::<Num>()
        .map_err(|_| InvalidHeader(header.to_owned()))
}

impl DimacsSink for ClauseDatabase {
    type Formula = ClauseDatabase;

    fn empty() -> Self {
        ClauseDatabase::new()
    }

    fn add_clause(&mut self, clause: &[Literal]) {
        let _ = self.append(clause);
    }

    fn into_formula(self) -> Self::Formula {
        self
    }
}
