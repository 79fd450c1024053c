//! Result markup as data.
//!
//! Renderers build a `Vec<Block>` from a response; [`render_blocks`] is the
//! only place that turns blocks into Yew markup. Keeping the two apart lets
//! every renderer be checked without a browser.

use yew::prelude::*;

use super::table::{ScrollTable, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Highlight,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Info => "info",
            Tone::Highlight => "highlight",
            Tone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `<h3>`
    Heading(String),
    /// `<h4>`
    Subheading(String),
    /// A paragraph, optionally led by a bold label.
    Line {
        label: Option<String>,
        text: String,
        tone: Option<Tone>,
    },
    /// A standalone status banner.
    Banner(Tone, String),
    Table(TableView),
    List(Vec<String>),
    /// A styled box grouping other blocks.
    Card {
        class: String,
        blocks: Vec<Block>,
    },
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading(text.into())
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Block::Subheading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Line {
            label: None,
            text: text.into(),
            tone: None,
        }
    }

    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Block::Line {
            label: Some(label.into()),
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(tone: Tone, text: impl Into<String>) -> Self {
        Block::Line {
            label: None,
            text: text.into(),
            tone: Some(tone),
        }
    }

    pub fn banner(tone: Tone, text: impl Into<String>) -> Self {
        Block::Banner(tone, text.into())
    }

    pub fn card(class: impl Into<String>, blocks: Vec<Block>) -> Self {
        Block::Card {
            class: class.into(),
            blocks,
        }
    }

    /// Plain text of this block and its children, for assertions and logs.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading(t) | Block::Subheading(t) | Block::Banner(_, t) => t.clone(),
            Block::Line { label, text, .. } => match label {
                Some(label) => format!("{}: {}", label, text),
                None => text.clone(),
            },
            Block::Table(table) => {
                let mut lines = vec![table.headers.join(" | ")];
                lines.extend(table.rows.iter().map(|r| r.cells.join(" | ")));
                lines.join("\n")
            }
            Block::List(items) => items.join("\n"),
            Block::Card { blocks, .. } => blocks
                .iter()
                .map(Block::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// First table among `blocks`, searching inside cards too.
pub fn find_table(blocks: &[Block]) -> Option<&TableView> {
    tables(blocks).into_iter().next()
}

pub fn tables(blocks: &[Block]) -> Vec<&TableView> {
    let mut found = Vec::new();
    for block in blocks {
        match block {
            Block::Table(table) => found.push(table),
            Block::Card { blocks, .. } => found.extend(tables(blocks)),
            _ => {}
        }
    }
    found
}

pub fn render_blocks(blocks: &[Block]) -> Html {
    html! {
        <>
            { for blocks.iter().map(render_block) }
        </>
    }
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading(text) => html! {
            <h3 class="text-lg font-bold text-[#173E63] mt-4 mb-2">{ text.clone() }</h3>
        },
        Block::Subheading(text) => html! {
            <h4 class="font-bold text-[#173E63] mt-3 mb-1">{ text.clone() }</h4>
        },
        Block::Line { label, text, tone } => {
            let class = classes!("my-1", tone.map(|t| t.class()));
            html! {
                <p {class}>
                    {
                        match label {
                            Some(label) => html! { <><strong>{ format!("{}:", label) }</strong>{ " " }</> },
                            None => html! {},
                        }
                    }
                    { text.clone() }
                </p>
            }
        }
        Block::Banner(tone, text) => html! {
            <div class={classes!(tone.class(), "rounded-xl", "p-3", "my-2")}>{ text.clone() }</div>
        },
        Block::Table(table) => html! { <ScrollTable table={table.clone()} /> },
        Block::List(items) => html! {
            <ul class="list-disc pl-6">
                { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
            </ul>
        },
        Block::Card { class, blocks } => html! {
            <div class={classes!(class.clone(), "rounded-xl", "border", "border-border", "p-4", "my-2")}>
                { render_blocks(blocks) }
            </div>
        },
    }
}
