//! Output formatting for search results and searchable fields

use crate::model::{EntityKind, OrganizationResult, Record, TicketResult, UserResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Organization fields shown for every result, in display order
pub const ORGANIZATION_FIELDS: &[&str] = &[
    "_id",
    "url",
    "external_id",
    "name",
    "domain_names",
    "created_at",
    "details",
    "shared_tickets",
    "tags",
];

/// User fields shown for every result, in display order
pub const USER_FIELDS: &[&str] = &[
    "_id",
    "url",
    "external_id",
    "name",
    "alias",
    "created_at",
    "active",
    "verified",
    "shared",
    "locale",
    "timezone",
    "last_login_at",
    "email",
    "phone",
    "signature",
    "organization_id",
    "tags",
    "suspended",
    "role",
];

/// Ticket fields shown for every result, in display order
pub const TICKET_FIELDS: &[&str] = &[
    "_id",
    "url",
    "external_id",
    "created_at",
    "type",
    "subject",
    "description",
    "priority",
    "status",
    "submitter_id",
    "assignee_id",
    "organization_id",
    "tags",
    "has_incidents",
    "due_at",
    "via",
];

const LABEL_WIDTH: usize = 20;
const SEPARATOR_WIDTH: usize = 80;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned `field  value` blocks
    #[default]
    Text,
    /// A JSON array of results
    Json,
}

/// A search result that knows how to print itself as text
pub trait Render: Serialize {
    const KIND: EntityKind;

    fn render<W: WriteColor>(&self, out: &mut W) -> io::Result<()>;
}

impl Render for OrganizationResult {
    const KIND: EntityKind = EntityKind::Organizations;

    fn render<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        write_record(out, &self.organization, ORGANIZATION_FIELDS)?;
        for (i, name) in self.user_names.iter().enumerate() {
            write_field(out, &format!("user_{}", i), name)?;
        }
        for (i, subject) in self.ticket_subjects.iter().enumerate() {
            write_field(out, &format!("ticket_{}", i), subject)?;
        }
        Ok(())
    }
}

impl Render for UserResult {
    const KIND: EntityKind = EntityKind::Users;

    fn render<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        write_record(out, &self.user, USER_FIELDS)?;
        write_field(out, "organization_name", &self.organization_name)?;
        for (i, subject) in self.ticket_subjects.iter().enumerate() {
            write_field(out, &format!("ticket_{}", i), subject)?;
        }
        Ok(())
    }
}

impl Render for TicketResult {
    const KIND: EntityKind = EntityKind::Tickets;

    fn render<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        write_record(out, &self.ticket, TICKET_FIELDS)?;
        write_field(out, "organization_name", &self.organization_name)
    }
}

/// Write every result followed by a total, or a JSON array
pub fn write_results<T: Render, W: WriteColor>(
    out: &mut W,
    results: &[T],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for result in results {
                writeln!(out)?;
                result.render(out)?;
            }
            writeln!(out)?;
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "Total {} found: {}", T::KIND, results.len())?;
            out.reset()?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Report a search with zero matches
pub fn write_not_found<W: WriteColor>(out: &mut W, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "[]"),
        OutputFormat::Text => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "No results found")?;
            out.reset()?;
            writeln!(out)
        }
    }
}

/// Print the field names each collection can be searched by
pub fn write_searchable_fields<W: WriteColor>(
    out: &mut W,
    fields: &BTreeMap<EntityKind, Vec<String>>,
) -> io::Result<()> {
    for kind in EntityKind::ALL {
        write_separator(out)?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "Search {} by:", kind.label())?;
        out.reset()?;
        writeln!(out)?;
        for field in fields.get(&kind).map(Vec::as_slice).unwrap_or(&[]) {
            writeln!(out, "{}", field)?;
        }
    }
    Ok(())
}

/// Blank line followed by a row of dashes
pub fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn write_record<W: WriteColor>(out: &mut W, record: &Record, fields: &[&str]) -> io::Result<()> {
    for &field in fields {
        match record.get(field) {
            Some(value) => write_field(out, field, value)?,
            None => write_field(out, field, "")?,
        }
    }
    Ok(())
}

fn write_field<W: WriteColor>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{:<width$} ", label, width = LABEL_WIDTH - 1)?;
    out.reset()?;
    writeln!(out, "{}", value)
}
