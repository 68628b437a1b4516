use std::fmt::Write as _;

use super::options::CliOptions;
use crate::board::{Board, CheckReport, CheckStatus, Coord, MoveList};

/// Text diagram of `board`, rank 8 on top unless flipped. Squares in
/// `highlights` are prefixed with `*`.
#[must_use]
pub fn render_board(board: &Board, highlights: Option<&MoveList>, opts: &CliOptions) -> String {
    let ranks: Vec<usize> = if opts.flip_board {
        (0..8).collect()
    } else {
        (0..8).rev().collect()
    };
    let files: Vec<usize> = if opts.flip_board {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &rank in &ranks {
        let _ = write!(out, "{}", rank + 1);
        for &file in &files {
            let coord = Coord::from_index(rank * 8 + file);
            let mark = if highlights.is_some_and(|h| h.contains(coord)) {
                '*'
            } else {
                ' '
            };
            let glyph = match board.occupant_at(coord) {
                Some(p) if opts.unicode => p.symbol(),
                Some(p) => p.to_fen_char(),
                None => '.',
            };
            out.push(mark);
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push(' ');
    for &file in &files {
        out.push(' ');
        out.push((b'a' + file as u8) as char);
    }
    out.push('\n');
    out
}

fn status_line(status: &CheckStatus) -> String {
    if !status.in_check {
        return format!("check {} none", status.color.to_string().to_lowercase());
    }
    let attackers: Vec<String> = status
        .attackers
        .iter()
        .map(|t| format!("{}@{}", t.kind, t.coord))
        .collect();
    format!(
        "check {} by {}",
        status.color.to_string().to_lowercase(),
        attackers.join(" ")
    )
}

/// One line per color, e.g. `check white by rook@e8`.
#[must_use]
pub fn render_report(report: &CheckReport) -> String {
    format!(
        "{}\n{}\n",
        status_line(&report.white),
        status_line(&report.black)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{check_report, BoardBuilder, Color, PieceKind};

    #[test]
    fn test_render_start_position() {
        let text = render_board(&Board::new(), None, &CliOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn test_render_flipped_with_highlights() {
        let board = Board::new();
        let highlights = board.moves_from("b1".parse().unwrap());
        let opts = CliOptions {
            flip_board: true,
            ..CliOptions::default()
        };
        let text = render_board(&board, Some(&highlights), &opts);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1 R N B K Q B N R");
        assert_eq!(lines[2], "3 . . . . .*. .*.");
        assert_eq!(lines[8], "  h g f e d c b a");
    }

    #[test]
    fn test_render_report() {
        let board = BoardBuilder::new()
            .piece("e1", Color::White, PieceKind::King)
            .piece("e8", Color::Black, PieceKind::Rook)
            .piece("a8", Color::Black, PieceKind::King)
            .build()
            .unwrap();
        let report = check_report(&board).unwrap();
        assert_eq!(
            render_report(&report),
            "check white by rook@e8\ncheck black none\n"
        );
    }
}
