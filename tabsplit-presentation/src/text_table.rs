use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: usize = 2;

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut out = String::with_capacity(256);
        self.write_line(&mut out, self.headers, &col_widths);
        let rule_width =
            col_widths.iter().sum::<usize>() + COLUMN_GAP * col_count.saturating_sub(1);
        let _ = writeln!(&mut out, "{}", "-".repeat(rule_width));
        for row in &self.rows {
            self.write_line(&mut out, row.as_ref(), &col_widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'a, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().copied().enumerate() {
            let cell = cells.get(i).map(AsRef::as_ref).unwrap_or("");
            let pad = " ".repeat(width - display_width(cell).min(width));
            if i > 0 {
                line.push_str(&" ".repeat(COLUMN_GAP));
            }
            match self.alignments.get(i).copied().unwrap_or_default() {
                Alignment::Left => {
                    line.push_str(cell);
                    line.push_str(&pad);
                }
                Alignment::Right => {
                    line.push_str(&pad);
                    line.push_str(cell);
                }
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Terminal columns taken by `text`; CJK characters count double.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c.is_ascii() || is_narrow(c) { 1 } else { 2 })
        .sum()
}

fn is_narrow(c: char) -> bool {
    !matches!(c,
        '\u{1100}'..='\u{115F}' |
        '\u{2E80}'..='\u{A4CF}' |
        '\u{AC00}'..='\u{D7A3}' |
        '\u{F900}'..='\u{FAFF}' |
        '\u{FF00}'..='\u{FF60}' |
        '\u{FFE0}'..='\u{FFE6}'
    )
}
