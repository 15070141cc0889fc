//! Interactive sortable table.
//!
//! Click a header (or press its number) to sort by that column; click again
//! to flip the direction. Press 'q' or Escape to quit. Logs go to
//! `table.log`.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyCode, MouseEventKind};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::text::pad_to_width;
use tabledom::{find_element, query_first, Document, Element, Event, MouseButton, Tag};
use tablesort::{SortDirection, TableSorter};

const TABLE_ID: &str = "planets";
const COLUMN_WIDTH: usize = 14;

const PLANETS: &[[&str; 4]] = &[
    ["Mercury", "Terrestrial", "0.39", "0"],
    ["Venus", "Terrestrial", "0.72", "0"],
    ["Earth", "Terrestrial", "1.00", "1"],
    ["Mars", "Terrestrial", "1.52", "2"],
    ["Jupiter", "Gas giant", "5.20", "95"],
    ["Saturn", "Gas giant", "9.58", "146"],
    ["Uranus", "Ice giant", "19.22", "28"],
    ["Neptune", "Ice giant", "30.05", "16"],
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let sorter = TableSorter::default();
    let mut doc = Document::new(Element::box_().id("root").child(planets()));
    let handles = sorter.attach_all(&mut doc)?;
    log::info!("wired {} sortable tables", handles.len());

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut doc, &sorter);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    for handle in handles {
        handle.detach(&mut doc);
    }
    result
}

fn planets() -> Element {
    let header = Element::tr().children(
        ["Planet", "Type", "Distance AU", "Moons"]
            .iter()
            .enumerate()
            .map(|(i, title)| Element::th(*title).id(format!("col-{i}"))),
    );
    let rows = PLANETS
        .iter()
        .map(|cells| Element::tr().children(cells.iter().map(|c| Element::td(*c))));

    Element::table()
        .id(TABLE_ID)
        .class("table-sortable")
        .child(Element::thead().child(header))
        .child(Element::tbody().children(rows))
}

fn run(
    stdout: &mut Stdout,
    doc: &mut Document,
    sorter: &TableSorter,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut status = String::from("Click a header or press 1-4 to sort");

    loop {
        draw(stdout, doc, sorter, &status)?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let column = match event::read()? {
            CtEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c) => c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)),
                _ => None,
            },
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(btn) if MouseButton::from(btn) == MouseButton::Left => {
                    // Header row is drawn on line 0
                    (mouse.row == 0).then_some(mouse.column as usize / (COLUMN_WIDTH + 1))
                }
                _ => None,
            },
            _ => None,
        };

        let Some(column) = column else {
            continue;
        };

        status = match doc.dispatch(&Event::click(format!("col-{column}"))) {
            Ok(outcome) if outcome.is_handled() => format!("Sorted by column {}", column + 1),
            Ok(_) => String::from("Nothing to sort"),
            Err(err) => {
                log::warn!("click on column {column} failed: {err}");
                err.to_string()
            }
        };
    }
}

fn draw(
    stdout: &mut Stdout,
    doc: &Document,
    sorter: &TableSorter,
    status: &str,
) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let Some(table) = find_element(doc.root(), TABLE_ID) else {
        return stdout.flush();
    };

    let mut lines = Vec::new();
    if let Some(head) = query_first(table, Tag::Tr) {
        lines.push(render_row(head, |th| match sorter.indicated(th) {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        }));
    }
    if let Some(body) = query_first(table, Tag::TBody) {
        lines.extend(body.child_elements().iter().map(|tr| render_row(tr, |_| "")));
    }
    lines.push(String::new());
    lines.push(status.to_string());

    for (y, line) in lines.iter().enumerate() {
        queue!(stdout, cursor::MoveTo(0, y as u16), Print(line))?;
    }
    stdout.flush()
}

fn render_row(row: &Element, suffix: impl Fn(&Element) -> &'static str) -> String {
    row.child_elements()
        .iter()
        .map(|cell| {
            let text = format!("{}{}", cell.text_content(), suffix(cell));
            pad_to_width(&text, COLUMN_WIDTH)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
