// src/ports/table.rs
use crate::constants::MAX_CELL_WIDTH;
use crate::domain::Prompt;
use crate::util::text::{display_width, truncate_cell};
use tracing::instrument;

const HEADERS: [&str; 8] = [
    "ID",
    "Title",
    "Description",
    "Image URL",
    "Type",
    "Attention note",
    "Example question",
    "Example answer",
];

const EMPTY_MESSAGE: &str = "No prompts found";

#[derive(Debug)]
pub struct TablePresenter {
    max_cell_width: usize,
}

impl TablePresenter {
    pub fn new() -> Self {
        Self {
            max_cell_width: MAX_CELL_WIDTH,
        }
    }

    pub fn with_max_cell_width(max_cell_width: usize) -> Self {
        Self { max_cell_width }
    }

    fn cells(&self, prompt: &Prompt) -> [String; 8] {
        let f = &prompt.fields;
        [
            prompt.id.to_string(),
            truncate_cell(&f.title, self.max_cell_width),
            truncate_cell(&f.description, self.max_cell_width),
            truncate_cell(&f.image_url, self.max_cell_width),
            truncate_cell(&f.kind, self.max_cell_width),
            truncate_cell(&f.attention_note, self.max_cell_width),
            truncate_cell(&f.example_question, self.max_cell_width),
            truncate_cell(&f.example_answer, self.max_cell_width),
        ]
    }

    /// Render the prompts as a plain-text table, one row per prompt in list order.
    #[instrument(level = "trace", skip(self, prompts), fields(count = prompts.len()))]
    pub fn render(&self, prompts: &[Prompt]) -> String {
        if prompts.is_empty() {
            return format!("{}\n", EMPTY_MESSAGE);
        }

        let rows: Vec<[String; 8]> = prompts.iter().map(|p| self.cells(p)).collect();

        let mut widths = HEADERS.map(display_width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(display_width(cell));
            }
        }

        let mut out = String::new();
        push_row(&mut out, HEADERS.iter().copied(), &widths);
        let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, separators.iter().map(String::as_str), &widths);
        for row in &rows {
            push_row(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }

    /// Render the prompts as a pretty-printed JSON array in wire format.
    pub fn render_json(&self, prompts: &[Prompt]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(prompts)
    }
}

impl Default for TablePresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
