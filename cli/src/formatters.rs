use std::io::{self, IsTerminal};

use broker_core::{
    models::{
        consultation::Consultation,
        contract::Contract,
        customer::Customer,
        property::Property,
        sms::{DeliverySummary, SmsRecord, SmsStatus, Template},
    },
    Notifier, PageMetadata, Severity,
};
use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::args::OutputFormat;

const NONE: &str = "-";

/// One table row of a list screen
pub trait ListRow: Serialize {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Color of the last cell, usually a status badge
    fn badge(&self) -> Option<Color> {
        None
    }

    /// Extra line printed under the table
    fn summary(_items: &[Self]) -> Option<String>
    where
        Self: Sized,
    {
        None
    }
}

impl ListRow for Contract {
    const HEADERS: &'static [&'static str] =
        &["ID", "고객", "매물 주소", "계약 유형", "계약 상태", "금액", "계약 기간"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_dash(&self.customer_name),
            or_dash(&self.property_address),
            self.contract_type.label().to_string(),
            self.contract_status.label().to_string(),
            self.price_summary().unwrap_or_else(|| NONE.to_string()),
            match (&self.started_at, &self.expired_at) {
                (None, None) => NONE.to_string(),
                (start, end) => format!(
                    "{} ~ {}",
                    start.as_deref().unwrap_or(""),
                    end.as_deref().unwrap_or("")
                ),
            },
        ]
    }
}

impl ListRow for Customer {
    const HEADERS: &'static [&'static str] = &["ID", "이름", "연락처", "이메일", "성별"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_dash(&self.contact),
            or_dash(&self.email),
            self.gender
                .as_ref()
                .map(|g| g.label().to_string())
                .unwrap_or_else(|| NONE.to_string()),
        ]
    }
}

impl ListRow for Property {
    const HEADERS: &'static [&'static str] = &["ID", "유형", "도로명 주소", "상세 주소", "상태"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.property_type.label().to_string(),
            or_dash(&self.road_address),
            or_dash(&self.detail_address),
            if self.active { "활성" } else { "비활성" }.to_string(),
        ]
    }

    fn badge(&self) -> Option<Color> {
        (!self.active).then_some(Color::Yellow)
    }
}

impl ListRow for Consultation {
    const HEADERS: &'static [&'static str] = &["ID", "고객", "연락처", "상담 유형", "상담 일시", "상태"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer.name.clone(),
            or_dash(&self.customer.contact),
            self.consultation_type.label().to_string(),
            self.consultation_date
                .as_deref()
                .map(format_request_time)
                .unwrap_or_else(|| NONE.to_string()),
            self.status.label().to_string(),
        ]
    }
}

impl ListRow for SmsRecord {
    const HEADERS: &'static [&'static str] =
        &["ID", "수신자 전화번호", "예약 일시", "요청 일시", "발송 상태"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_contact(&self.receiver),
            reservation_cell(self),
            format_request_time(&self.created_at),
            self.status.label().to_string(),
        ]
    }

    fn badge(&self) -> Option<Color> {
        match self.status {
            SmsStatus::Success => Some(Color::Green),
            SmsStatus::Fail => Some(Color::Red),
        }
    }

    fn summary(items: &[Self]) -> Option<String> {
        let summary = DeliverySummary::of(items);
        Some(format!("성공 {}건 / 실패 {}건", summary.success, summary.fail))
    }
}

impl ListRow for Template {
    const HEADERS: &'static [&'static str] = &["ID", "제목", "내용"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.content.replace('\n', " "),
        ]
    }
}

/// `010-1234-5678`; anything but an 11 character number renders as `-`
pub fn format_contact(contact: &str) -> String {
    let chars: Vec<char> = contact.chars().collect();
    if chars.len() != 11 {
        return NONE.to_string();
    }

    let head: String = chars[..3].iter().collect();
    let body: String = chars[3..7].iter().collect();
    let foot: String = chars[7..].iter().collect();
    format!("{}-{}-{}", head, body, foot)
}

/// `YYYYMMDD` + `HH:mm` to `YYYY-MM-DD HH:mm`
pub fn format_reserve_time(rdate: &str, rtime: &str) -> String {
    let joined = format!("{}{}", rdate, rtime);
    if joined.len() != 13 || !joined.is_ascii() {
        return NONE.to_string();
    }

    format!(
        "{}-{}-{} {}",
        &joined[0..4],
        &joined[4..6],
        &joined[6..8],
        &joined[8..]
    )
}

/// ISO timestamp to `yyyy-MM-dd HH:mm`, the input unchanged when it does not parse
pub fn format_request_time(request_time: &str) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M";

    if let Ok(time) = DateTime::parse_from_rfc3339(request_time) {
        return time.format(FORMAT).to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(request_time, pattern).ok())
        .map(|time| time.format(FORMAT).to_string())
        .unwrap_or_else(|| request_time.to_string())
}

/// A reservation equal to the request time was sent immediately
fn reservation_cell(record: &SmsRecord) -> String {
    let reserved = format_reserve_time(&record.rdate, &record.rtime);
    if reserved == format_request_time(&record.created_at) {
        NONE.to_string()
    } else {
        reserved
    }
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        NONE.to_string()
    } else {
        value.to_string()
    }
}

/// Terminal columns taken by `text`; Hangul and CJK are double width
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFF00..=0xFF60 => 2,
            _ => 1,
        })
        .sum()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(fill))
}

pub fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(io::stdout().is_terminal()))
}

pub struct ListFormatter {
    output: OutputFormat,
}

impl ListFormatter {
    pub fn new(output: OutputFormat) -> Self {
        ListFormatter { output }
    }

    pub fn print_page<T: ListRow>(
        &self,
        out: &mut dyn WriteColor,
        items: &[T],
        pagination: &PageMetadata,
        empty: &str,
    ) -> io::Result<()> {
        match self.output {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct Page<'a, T> {
                    content: &'a [T],
                    pagination: &'a PageMetadata,
                }

                let json = serde_json::to_string_pretty(&Page {
                    content: items,
                    pagination,
                })
                .map_err(io::Error::other)?;
                writeln!(out, "{}", json)
            }
            OutputFormat::Plain => {
                for item in items {
                    writeln!(out, "{}", item.cells().join("\t"))?;
                }
                Ok(())
            }
            OutputFormat::Pretty => {
                if items.is_empty() {
                    writeln!(out, "{}", empty)?;
                } else {
                    self.print_table(out, items)?;
                    if let Some(summary) = T::summary(items) {
                        writeln!(out, "{}", summary)?;
                    }
                }
                print_footer(out, pagination)
            }
        }
    }

    /// Unpaginated list, e.g. SMS templates
    pub fn print_all<T: ListRow>(&self, out: &mut dyn WriteColor, items: &[T], empty: &str) -> io::Result<()> {
        match self.output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
                writeln!(out, "{}", json)
            }
            OutputFormat::Plain => {
                for item in items {
                    writeln!(out, "{}", item.cells().join("\t"))?;
                }
                Ok(())
            }
            OutputFormat::Pretty if items.is_empty() => writeln!(out, "{}", empty),
            OutputFormat::Pretty => self.print_table(out, items),
        }
    }

    fn print_table<T: ListRow>(&self, out: &mut dyn WriteColor, items: &[T]) -> io::Result<()> {
        let rows: Vec<Vec<String>> = items.iter().map(|item| item.cells()).collect();

        let widths: Vec<usize> = T::HEADERS
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        out.set_color(ColorSpec::new().set_bold(true))?;
        let header: Vec<String> = T::HEADERS
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        writeln!(out, "{}", header.join("  ").trim_end())?;
        out.reset()?;

        for (item, row) in items.iter().zip(&rows) {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(out, "  ")?;
                }
                if i == last {
                    if let Some(color) = item.badge() {
                        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
                    }
                    write!(out, "{}", cell)?;
                    out.reset()?;
                } else {
                    write!(out, "{}", pad(cell, widths.get(i).copied().unwrap_or(0)))?;
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

fn print_footer(out: &mut dyn WriteColor, pagination: &PageMetadata) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    writeln!(
        out,
        "{}/{} 페이지, 총 {}건",
        pagination.current_page, pagination.total_pages, pagination.total_elements
    )?;
    out.reset()
}

/// Single record as pretty JSON
pub fn print_record<T: Serialize>(out: &mut dyn WriteColor, record: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(record).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

/// Toasts on stderr, so stdout stays clean for piping
pub struct TerminalNotifier {
    writer: BufferWriter,
}

impl TerminalNotifier {
    pub fn stderr() -> Self {
        TerminalNotifier {
            writer: BufferWriter::stderr(color_choice(io::stderr().is_terminal())),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn show_toast(&self, message: &str, severity: Severity) {
        let mut buffer = self.writer.buffer();
        if write_toast(&mut buffer, message, severity).is_ok() {
            let _ = self.writer.print(&buffer);
        }
    }
}

pub fn write_toast(out: &mut dyn WriteColor, message: &str, severity: Severity) -> io::Result<()> {
    let (label, color) = match severity {
        Severity::Info => ("알림", Color::Cyan),
        Severity::Success => ("완료", Color::Green),
        Severity::Warning => ("주의", Color::Yellow),
        Severity::Error => ("오류", Color::Red),
    };

    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "[{}]", label)?;
    out.reset()?;
    writeln!(out, " {}", message)
}
