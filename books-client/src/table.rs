use crate::client::Book;
use std::io::{self, Write};

const HEADER: [&str; 3] = ["Author", "Title", "Image Link"];
const PADDING: usize = 1;

/// Writes the books as a space-aligned table. Every column but the last is
/// padded to its widest cell plus one space.
pub fn render_books<W: Write>(books: &[Book], out: &mut W) -> io::Result<()> {
    let rows: Vec<[&str; 3]> = std::iter::once(HEADER)
        .chain(
            books
                .iter()
                .map(|b| [b.author.as_str(), b.title.as_str(), b.image.as_str()]),
        )
        .collect();

    let width = |column: usize| {
        rows.iter()
            .map(|row| row[column].chars().count())
            .max()
            .unwrap_or(0)
            + PADDING
    };
    let (author_width, title_width) = (width(0), width(1));

    for [author, title, image] in rows {
        writeln!(
            out,
            "{:<aw$}{:<tw$}{}",
            author,
            title,
            image,
            aw = author_width,
            tw = title_width
        )?;
    }
    out.flush()
}
