//! Interactive menu and search dispatch on top of a [`Searcher`].

use crate::error::SearchError;
use crate::model::EntityKind;
use crate::output::{self, OutputFormat, Render};
use crate::query::{split_terms, Searcher};
use anyhow::Result;
use std::io::{BufRead, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Menu entries, in the order they are numbered
const MENU: [&str; 3] = ["Search", "View searchable fields", "Quit"];

/// Entity choices offered by the search prompt, in the order they are numbered
const ENTITY_CHOICES: [EntityKind; 3] = [
    EntityKind::Users,
    EntityKind::Tickets,
    EntityKind::Organizations,
];

/// Command-line front end. Reads choices from any `BufRead` and writes to `out`.
pub struct App<S, W> {
    searcher: S,
    out: W,
    format: OutputFormat,
}

impl<S: Searcher, W: WriteColor> App<S, W> {
    pub fn new(searcher: S, out: W) -> Self {
        Self {
            searcher,
            out,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "Welcome to zearch!")?;
        self.out.reset()?;
        writeln!(self.out, " Type a number and press return.")?;

        loop {
            writeln!(self.out)?;
            for (i, entry) in MENU.iter().enumerate() {
                writeln!(self.out, "  {}) {}", i + 1, entry)?;
            }

            let Some(choice) = self.prompt(&mut input, "What would you like to do?")? else {
                break;
            };

            match choice.trim().to_lowercase().as_str() {
                "1" | "search" => {
                    if !self.handle_search(&mut input)? {
                        break;
                    }
                }
                "2" | "fields" => self.print_searchable_fields()?,
                "3" | "quit" | "q" => {
                    if self.handle_quit(&mut input)? {
                        break;
                    }
                }
                "" => {}
                other => writeln!(self.out, "Unknown option {:?}, pick 1-{}", other, MENU.len())?,
            }
        }

        Ok(())
    }

    /// Search `entity` for `term = value`.
    ///
    /// Both `term` and `value` may hold several alternatives joined by `" or "`;
    /// each pair runs as its own query and the results are concatenated.
    /// Zero matches is reported as "No results found", not as an error.
    pub fn search(&mut self, entity: &str, term: &str, value: &str) -> Result<()> {
        let kind: EntityKind = entity.parse()?;
        let pairs = split_terms(term, value)?;

        if self.format == OutputFormat::Text {
            output::write_separator(&mut self.out)?;
        }

        match kind {
            EntityKind::Organizations => {
                let results = collect_results(&pairs, |t, v| self.searcher.organizations(t, v));
                self.write_results(results)
            }
            EntityKind::Users => {
                let results = collect_results(&pairs, |t, v| self.searcher.users(t, v));
                self.write_results(results)
            }
            EntityKind::Tickets => {
                let results = collect_results(&pairs, |t, v| self.searcher.tickets(t, v));
                self.write_results(results)
            }
        }
    }

    pub fn print_searchable_fields(&mut self) -> Result<()> {
        let fields = self.searcher.searchable_fields();
        output::write_searchable_fields(&mut self.out, &fields)?;
        Ok(())
    }

    fn write_results<T: Render>(&mut self, results: Result<Vec<T>, SearchError>) -> Result<()> {
        match results {
            Ok(results) => output::write_results(&mut self.out, &results, self.format)?,
            Err(SearchError::NotFound) => output::write_not_found(&mut self.out, self.format)?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    /// Returns `false` when input ended mid-way
    fn handle_search<R: BufRead>(&mut self, input: &mut R) -> Result<bool> {
        writeln!(self.out, "Select a search option:")?;
        for (i, kind) in ENTITY_CHOICES.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, kind.label())?;
        }

        let Some(entity) = self.prompt(input, "Entity")? else {
            return Ok(false);
        };
        let entity = entity.trim();
        let entity = match entity.parse::<usize>() {
            Ok(n) if (1..=ENTITY_CHOICES.len()).contains(&n) => ENTITY_CHOICES[n - 1].as_str(),
            _ => entity,
        };

        let Some(term) = self.prompt(input, "Type search term:")? else {
            return Ok(false);
        };
        let Some(value) = self.prompt(input, "Type search value:")? else {
            return Ok(false);
        };

        if let Err(err) = self.search(entity, &term, &value) {
            tracing::debug!(error = %err, "search failed");
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(self.out, "Search failed: {}", err)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        Ok(true)
    }

    /// Returns `true` when the session should end
    fn handle_quit<R: BufRead>(&mut self, input: &mut R) -> Result<bool> {
        match self.prompt(input, "Are you sure you want to quit? [y/N]")? {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("y") => Ok(false),
            _ => {
                writeln!(self.out, "See ya!")?;
                Ok(true)
            }
        }
    }

    /// Print `label` and read one line, without its line ending. `None` at end of input.
    fn prompt<R: BufRead>(&mut self, input: &mut R, label: &str) -> Result<Option<String>> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "{} ", label)?;
        self.out.reset()?;
        self.out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run one query per term/value pair and concatenate the results.
///
/// A pair with no matches contributes nothing; any other error aborts.
fn collect_results<T>(
    pairs: &[(&str, &str)],
    query: impl Fn(&str, &str) -> Result<Vec<T>, SearchError>,
) -> Result<Vec<T>, SearchError> {
    let mut results = Vec::new();
    for &(term, value) in pairs {
        match query(term, value) {
            Ok(found) => results.extend(found),
            Err(SearchError::NotFound) => continue,
            Err(err) => return Err(err),
        }
    }

    if results.is_empty() {
        return Err(SearchError::NotFound);
    }
    Ok(results)
}
