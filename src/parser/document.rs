//! HTML table extraction.
//!
//! Paystub statements are loosely-formatted HTML with no schema; the only
//! structure the engine relies on is tables of text cells. This module
//! reduces a raw document to that shape (every `<table>` becomes rows of
//! plain-text cells with tags stripped and entities decoded) and leaves
//! all interpretation to the label-matching layer.

/// One extracted table: rows of plain-text cells.
///
/// Empty cells are preserved so column positions survive extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    /// Rows of cell texts, in document order.
    pub(crate) rows: Vec<Vec<String>>,
}

/// In-progress table state while scanning.
#[derive(Default)]
struct TableFrame {
    rows: Vec<Vec<String>>,
    row: Option<Vec<String>>,
    cell: Option<String>,
}

impl TableFrame {
    fn open_row(&mut self) {
        self.close_row();
        self.row = Some(Vec::new());
    }

    fn open_cell(&mut self) {
        self.close_cell();
        if self.row.is_none() {
            // Tolerate a <td> with no enclosing <tr>.
            self.row = Some(Vec::new());
        }
        self.cell = Some(String::new());
    }

    fn close_cell(&mut self) {
        if let Some(cell) = self.cell.take() {
            if let Some(row) = self.row.as_mut() {
                row.push(cell.trim().to_string());
            }
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        if let Some(row) = self.row.take() {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Table {
        self.close_row();
        Table { rows: self.rows }
    }
}

/// Extracts every table in the document as rows of plain-text cells.
///
/// The scanner tolerates the sloppiness real statements exhibit: unclosed
/// `<td>`/`<tr>` tags, nested tables (recorded as separate tables), and
/// `<br>` line breaks inside cells (preserved as newlines). Text outside
/// table cells is ignored, as are `<script>`/`<style>` bodies and comments.
pub(crate) fn extract_tables(html: &str) -> Vec<Table> {
    let mut out = Vec::new();
    let mut stack: Vec<TableFrame> = Vec::new();
    let mut i = 0;

    while i < html.len() {
        let rest = &html[i..];

        if rest.starts_with("<!--") {
            i += rest.find("-->").map(|p| p + 3).unwrap_or(rest.len());
            continue;
        }

        if rest.starts_with('<') {
            let Some(gt) = rest.find('>') else {
                break;
            };
            let tag_src = &rest[1..gt];
            let closing = tag_src.starts_with('/');
            let name: String = tag_src
                .trim_start_matches('/')
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase();
            i += gt + 1;

            match (name.as_str(), closing) {
                ("table", false) => stack.push(TableFrame::default()),
                ("table", true) => {
                    if let Some(frame) = stack.pop() {
                        out.push(frame.finish());
                    }
                }
                ("tr", false) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.open_row();
                    }
                }
                ("tr", true) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.close_row();
                    }
                }
                ("td" | "th", false) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.open_cell();
                    }
                }
                ("td" | "th", true) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.close_cell();
                    }
                }
                ("br", false) => {
                    if let Some(cell) = stack.last_mut().and_then(|f| f.cell.as_mut()) {
                        cell.push('\n');
                    }
                }
                ("script" | "style", false) => {
                    i += skip_element(&html[i..], &name);
                }
                _ => {}
            }
            continue;
        }

        let text_end = rest.find('<').unwrap_or(rest.len());
        if let Some(cell) = stack.last_mut().and_then(|f| f.cell.as_mut()) {
            cell.push_str(&decode_entities(&rest[..text_end]));
        }
        i += text_end;
    }

    // Unterminated tables still count.
    for frame in stack.drain(..) {
        out.push(frame.finish());
    }

    out
}

/// Returns the offset just past `</name...>`, searched case-insensitively,
/// or the remaining length when the element never closes.
fn skip_element(rest: &str, name: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < rest.len() {
        if bytes[i] == b'<' && rest[i..].len() > name.len() + 1 && rest[i + 1..].starts_with('/') {
            let candidate = &rest[i + 2..];
            if candidate.len() >= name.len()
                && candidate[..name.len()].eq_ignore_ascii_case(name)
            {
                return rest[i..].find('>').map(|p| i + p + 1).unwrap_or(rest.len());
            }
        }
        i += 1;
    }
    rest.len()
}

/// Decodes the handful of entities that actually occur in statements.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let Some(semi) = rest.find(';').filter(|&p| p <= 10) else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };

        let entity = &rest[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => entity
                .strip_prefix('#')
                .and_then(|num| {
                    if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        num.parse::<u32>().ok()
                    }
                })
                .and_then(char::from_u32),
        };

        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
