use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "function", fg: Color::Blue },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "operator", fg: Color::White },
    PaletteItem { name: "comparison", fg: Color::Magenta },
    PaletteItem { name: "punctuation", fg: Color::DarkGray },
    PaletteItem { name: "error", fg: Color::Red },
];

fn palette(name: &str) -> Color {
    PALETTE
        .iter()
        .find(|item| item.name == name)
        .unwrap_or(&PALETTE[0])
        .fg
}

fn highlight_name(token: &Token) -> &'static str {
    match token {
        Token::Function => "function",
        Token::Integer => "number",
        Token::Operator => "operator",
        Token::Comparison => "comparison",
        Token::LParen | Token::RParen => "punctuation",
        // Brackets and unknown words never evaluate.
        Token::LBracket | Token::RBracket | Token::Word => "error",
    }
}

pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token_res, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((Style::new().fg(palette("")), line[curr_end..span.start].to_string()));
            }
            let name = match &token_res {
                Ok(token) => highlight_name(token),
                Err(_) => "error",
            };
            output.push((Style::new().fg(palette(name)), line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(palette("")), line[curr_end..].to_string()));
        }

        output
    }
}
