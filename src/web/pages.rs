//! HTML for every page. Markup is assembled by hand; anything a player typed
//! goes through [`escape`].

use std::fmt::Write;

use crate::game::{Board, Cell, Token};
use crate::leaderboard::GameRecord;

use super::view::{EndPageView, GamePageView};

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Puissance 4</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<nav><a href="/">Home</a> <a href="/game/init">New game</a> <a href="/game/leaderboard">Leaderboard</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn token_label(token: Token) -> &'static str {
    match token {
        Token::Red => "Red",
        Token::Yellow => "Yellow",
    }
}

fn board_table(board: &Board) -> String {
    let mut html = String::from("<table class=\"board\">\n");
    for row in board.rows() {
        html.push_str("<tr>");
        for cell in row {
            let class = match cell {
                Cell::Empty => "cell",
                Cell::Red => "cell rouge",
                Cell::Yellow => "cell jaune",
            };
            let _ = write!(html, "<td class=\"{class}\"></td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

fn players_line(player1: &str, player2: &str, first_token: Token) -> String {
    format!(
        "<p class=\"players\"><span class=\"{t1}\">{p1}</span> vs <span class=\"{t2}\">{p2}</span></p>\n",
        t1 = first_token.as_str(),
        t2 = first_token.other().as_str(),
        p1 = escape(player1),
        p2 = escape(player2),
    )
}

fn result_line(winner: &str, draw: bool) -> String {
    if draw {
        "<p class=\"result\">Draw: the board is full.</p>\n".to_string()
    } else {
        format!("<p class=\"result\">{} wins!</p>\n", escape(winner))
    }
}

pub fn home() -> String {
    layout(
        "Home",
        r#"<h1>Puissance 4</h1>
<p>Two players, one board. Line up four tokens horizontally, vertically or diagonally to win.</p>
<p><a class="button" href="/game/init">Start a game</a> <a class="button" href="/game/leaderboard">Leaderboard</a></p>
"#,
    )
}

pub fn init_form() -> String {
    layout(
        "New game",
        r#"<h1>New game</h1>
<form method="post" action="/game/init/traitement">
<label>Player 1 <input type="text" name="name" required></label>
<label>Player 2 <input type="text" name="name2" required></label>
<fieldset>
<legend>Player 1 token</legend>
<label><input type="radio" name="jetoncolor" value="rouge" checked> Red</label>
<label><input type="radio" name="jetoncolor" value="jaune"> Yellow</label>
</fieldset>
<button type="submit">Play</button>
</form>
"#,
    )
}

pub fn game(view: &GamePageView) -> String {
    let mut body = String::from("<h1>Game</h1>\n");
    body.push_str(&players_line(&view.player1, &view.player2, view.first_token));

    match &view.current_player {
        Some((_, name, token)) => {
            let _ = writeln!(
                body,
                "<p class=\"turn {}\">{}'s turn ({})</p>",
                token.as_str(),
                escape(name),
                token_label(*token),
            );
        }
        None => body.push_str(&result_line(&view.winner, view.draw)),
    }

    if !view.message.is_empty() {
        let _ = writeln!(body, "<p class=\"message\">{}</p>", escape(&view.message));
    }

    body.push_str("<div class=\"columns\">\n");
    for column in &view.columns {
        let disabled = if column.open { "" } else { " disabled" };
        let _ = writeln!(
            body,
            "<form method=\"post\" action=\"/game/play/move\"><input type=\"hidden\" name=\"column\" value=\"{index}\"><button type=\"submit\"{disabled}>{label}</button></form>",
            index = column.index,
            label = column.index + 1,
        );
    }
    body.push_str("</div>\n");
    body.push_str(&board_table(&view.grid));

    if view.is_over() {
        body.push_str("<p><a class=\"button\" href=\"/game/end\">See the result</a></p>\n");
    }

    layout("Game", &body)
}

pub fn game_end(view: &EndPageView) -> String {
    let mut body = String::from("<h1>Game over</h1>\n");
    body.push_str(&players_line(&view.player1, &view.player2, view.first_token));
    body.push_str(&result_line(&view.winner, view.draw));
    body.push_str(&board_table(&view.grid));

    match view.record_id {
        Some(id) => {
            let _ = writeln!(
                body,
                "<p>Saved as game <a href=\"/game/grid/{id}\">#{id}</a>.</p>"
            );
        }
        None => body.push_str("<p class=\"message\">This game could not be saved.</p>\n"),
    }
    body.push_str(
        "<p><a class=\"button\" href=\"/game/init\">Play again</a> <a class=\"button\" href=\"/game/leaderboard\">Leaderboard</a></p>\n",
    );

    layout("Game over", &body)
}

pub fn leaderboard(records: &[GameRecord]) -> String {
    let mut body = String::from("<h1>Leaderboard</h1>\n");

    if records.is_empty() {
        body.push_str("<p>No finished games yet.</p>\n");
        return layout("Leaderboard", &body);
    }

    body.push_str(
        "<table class=\"leaderboard\">\n<tr><th>#</th><th>Date</th><th>Players</th><th>Result</th><th>Turns</th><th></th></tr>\n",
    );
    for record in records {
        let result = if record.draw {
            "Draw".to_string()
        } else {
            escape(&record.winner)
        };
        let _ = writeln!(
            body,
            "<tr><td>{id}</td><td>{date}</td><td>{p1} vs {p2}</td><td>{result}</td><td>{turns}</td><td><a href=\"/game/grid/{id}\">Board</a></td></tr>",
            id = record.id,
            date = record.date.format("%d/%m/%Y %H:%M"),
            p1 = escape(&record.player1),
            p2 = escape(&record.player2),
            turns = record.turn_count,
        );
    }
    body.push_str("</table>\n");

    layout("Leaderboard", &body)
}

pub fn game_grid(record: &GameRecord) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Game #{}</h1>", record.id);
    let _ = writeln!(
        body,
        "<p class=\"date\">{}</p>",
        record.date.format("%d/%m/%Y %H:%M")
    );
    body.push_str(&players_line(&record.player1, &record.player2, record.first_token));
    body.push_str(&result_line(&record.winner, record.draw));
    let _ = writeln!(body, "<p>{} turns played.</p>", record.turn_count);
    body.push_str(&board_table(&record.board));

    layout(&format!("Game #{}", record.id), &body)
}

pub fn error(code: &str, message: &str) -> String {
    let mut body = String::from("<h1>Something went wrong</h1>\n");
    if !code.is_empty() {
        let _ = writeln!(body, "<p class=\"code\">Error {}</p>", escape(code));
    }
    if !message.is_empty() {
        let _ = writeln!(body, "<p class=\"message\">{}</p>", escape(message));
    }
    body.push_str("<p><a class=\"button\" href=\"/\">Back home</a></p>\n");

    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Zoé"), "Zoé");
    }

    #[test]
    fn test_game_page_escapes_names() {
        let session = GameSession::initialize("<script>", "Bob", Token::Red);
        let html = game(&GamePageView::build(&session, ""));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_game_page_has_one_form_per_column() {
        let mut session = GameSession::initialize("Alice", "Bob", Token::Red);
        for _ in 0..6 {
            session.drop_token(0).unwrap();
        }
        let html = game(&GamePageView::build(&session, "This column is full."));

        assert_eq!(html.matches("action=\"/game/play/move\"").count(), 7);
        assert_eq!(html.matches(" disabled>").count(), 1);
        assert!(html.contains("name=\"column\" value=\"6\""));
        assert!(html.contains("This column is full."));
        assert!(html.contains("Alice's turn (Red)"));
        assert_eq!(html.matches("cell rouge").count(), 3);
        assert_eq!(html.matches("cell jaune").count(), 3);
    }

    #[test]
    fn test_finished_game_links_to_result() {
        let mut session = GameSession::initialize("Alice", "Bob", Token::Red);
        for col in [0, 1, 0, 1, 0, 1, 0] {
            session.drop_token(col).unwrap();
        }
        let html = game(&GamePageView::build(&session, ""));
        assert!(html.contains("Alice wins!"));
        assert!(html.contains("href=\"/game/end\""));
        assert_eq!(html.matches(" disabled>").count(), 7);
    }

    #[test]
    fn test_empty_leaderboard() {
        let html = leaderboard(&[]);
        assert!(html.contains("No finished games yet."));
    }

    #[test]
    fn test_error_page() {
        let html = error("404", "Game not found");
        assert!(html.contains("Error 404"));
        assert!(html.contains("Game not found"));
    }
}
