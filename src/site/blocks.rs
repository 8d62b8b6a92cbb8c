//! Block list → HTML.
//!
//! Every piece of text goes through handlebars' `html_escape`, which also
//! escapes `=` and backticks. Consecutive list items
//! share one `<ul>`/`<ol>`.

use crate::model::blocks::{CalloutBlock, CodeBlock, FileSource, LinkBlock};
use crate::model::{plain_text, BlockKind, BlockRecord, RichText};
use handlebars::html_escape;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenList {
    None,
    Bulleted,
    Numbered,
}

impl OpenList {
    fn close_tag(self) -> &'static str {
        match self {
            OpenList::None => "",
            OpenList::Bulleted => "</ul>\n",
            OpenList::Numbered => "</ol>\n",
        }
    }
}

/// Renders blocks in order.
pub fn render_blocks(blocks: &[BlockRecord]) -> String {
    let mut html = String::with_capacity(blocks.len() * 128);
    // Writing into a String cannot fail.
    let _ = write_blocks(&mut html, blocks);
    html
}

fn write_blocks(html: &mut String, blocks: &[BlockRecord]) -> std::fmt::Result {
    let mut open = OpenList::None;

    for block in blocks {
        let kind = block.kind();

        let wanted = match &kind {
            BlockKind::BulletedListItem { .. } => OpenList::Bulleted,
            BlockKind::NumberedListItem { .. } => OpenList::Numbered,
            _ => OpenList::None,
        };
        if wanted != open {
            html.push_str(open.close_tag());
            match wanted {
                OpenList::Bulleted => html.push_str("<ul>\n"),
                OpenList::Numbered => html.push_str("<ol>\n"),
                OpenList::None => {}
            }
            open = wanted;
        }

        render_block(html, block, kind)?;
    }

    html.push_str(open.close_tag());
    Ok(())
}

fn render_block(html: &mut String, block: &BlockRecord, kind: BlockKind) -> std::fmt::Result {
    match kind {
        BlockKind::Paragraph { paragraph } => {
            writeln!(html, "<p>{}</p>", render_rich_text(&paragraph.rich_text))
        }
        BlockKind::Heading1 { heading_1 } => {
            writeln!(html, "<h2>{}</h2>", render_rich_text(&heading_1.rich_text))
        }
        BlockKind::Heading2 { heading_2 } => {
            writeln!(html, "<h3>{}</h3>", render_rich_text(&heading_2.rich_text))
        }
        BlockKind::Heading3 { heading_3 } => {
            writeln!(html, "<h4>{}</h4>", render_rich_text(&heading_3.rich_text))
        }
        BlockKind::BulletedListItem {
            bulleted_list_item: item,
        }
        | BlockKind::NumberedListItem {
            numbered_list_item: item,
        } => writeln!(html, "<li>{}</li>", render_rich_text(&item.rich_text)),
        BlockKind::ToDo { to_do } => writeln!(
            html,
            "<div class=\"to-do\"><input type=\"checkbox\" disabled{}> {}</div>",
            if to_do.checked.unwrap_or(false) {
                " checked"
            } else {
                ""
            },
            render_rich_text(&to_do.rich_text)
        ),
        BlockKind::Toggle { toggle } => writeln!(
            html,
            "<details><summary>{}</summary></details>",
            render_rich_text(&toggle.rich_text)
        ),
        BlockKind::Quote { quote } => writeln!(
            html,
            "<blockquote>{}</blockquote>",
            render_rich_text(&quote.rich_text)
        ),
        BlockKind::Callout { callout } => render_callout(html, &callout),
        BlockKind::Code { code } => render_code(html, &code),
        BlockKind::Divider => writeln!(html, "<hr>"),
        BlockKind::Image { image } => render_image(html, &image),
        BlockKind::Bookmark { bookmark } => render_link_block(html, "bookmark", &bookmark),
        BlockKind::Embed { embed } => render_link_block(html, "embed", &embed),
        BlockKind::Equation { equation } => writeln!(
            html,
            "<div class=\"equation\"><code>{}</code></div>",
            html_escape(&equation.expression)
        ),
        BlockKind::Unsupported => {
            log::debug!(
                "Skipping unsupported block {} of type {}",
                block.id,
                block.block_type()
            );
            Ok(())
        }
    }
}

fn render_callout(html: &mut String, callout: &CalloutBlock) -> std::fmt::Result {
    let icon = callout
        .icon
        .as_ref()
        .and_then(|i| i.emoji.as_deref())
        .map(|emoji| format!("<span class=\"callout-icon\">{}</span>", html_escape(emoji)))
        .unwrap_or_default();
    writeln!(
        html,
        "<aside class=\"callout\">{}<div>{}</div></aside>",
        icon,
        render_rich_text(&callout.rich_text)
    )
}

fn render_code(html: &mut String, code: &CodeBlock) -> std::fmt::Result {
    let class = code
        .language
        .as_deref()
        .map(language_class)
        .filter(|lang| !lang.is_empty())
        .map(|lang| format!(" class=\"language-{}\"", lang))
        .unwrap_or_default();
    write!(
        html,
        "<pre><code{}>{}</code></pre>",
        class,
        html_escape(&plain_text(&code.rich_text))
    )?;
    if !code.caption.is_empty() {
        write!(
            html,
            "<p class=\"caption\">{}</p>",
            render_rich_text(&code.caption)
        )?;
    }
    writeln!(html)
}

fn render_image(html: &mut String, image: &FileSource) -> std::fmt::Result {
    let Some(src) = image.url().filter(|url| is_safe_href(url)) else {
        return Ok(());
    };
    let caption = plain_text(&image.caption);
    write!(
        html,
        "<figure><img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
        html_escape(src),
        html_escape(&caption)
    )?;
    if !caption.is_empty() {
        write!(
            html,
            "<figcaption>{}</figcaption>",
            render_rich_text(&image.caption)
        )?;
    }
    writeln!(html, "</figure>")
}

fn render_link_block(html: &mut String, class: &str, link: &LinkBlock) -> std::fmt::Result {
    if !is_safe_href(&link.url) {
        return Ok(());
    }
    let label = if link.caption.is_empty() {
        html_escape(&link.url)
    } else {
        render_rich_text(&link.caption)
    };
    writeln!(
        html,
        "<p class=\"{}\"><a href=\"{}\" rel=\"noopener\">{}</a></p>",
        class,
        html_escape(&link.url),
        label
    )
}

/// Renders spans with their annotations and links.
pub fn render_rich_text(spans: &[RichText]) -> String {
    let mut out = String::new();
    for span in spans {
        let mut piece = html_escape(&span.plain_text);
        let a = &span.annotations;
        if a.code {
            piece = format!("<code>{}</code>", piece);
        }
        if a.bold {
            piece = format!("<strong>{}</strong>", piece);
        }
        if a.italic {
            piece = format!("<em>{}</em>", piece);
        }
        if a.strikethrough {
            piece = format!("<s>{}</s>", piece);
        }
        if a.underline {
            piece = format!("<u>{}</u>", piece);
        }
        if let Some(href) = span.link().filter(|href| is_safe_href(href)) {
            piece = format!("<a href=\"{}\">{}</a>", html_escape(href), piece);
        }
        out.push_str(&piece);
    }
    out
}

/// Only web, mail and site-relative links are emitted.
fn is_safe_href(href: &str) -> bool {
    let lower = href.trim().to_ascii_lowercase();
    lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("mailto:")
        || (lower.starts_with('/') && !lower.starts_with("//"))
}

/// Notion language names ("plain text", "c++") → a class-safe token.
fn language_class(language: &str) -> String {
    language
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            '+' | '#' | '-' => Some(c),
            ' ' => Some('-'),
            _ => None,
        })
        .collect()
}
