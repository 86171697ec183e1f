use std::process::ExitCode;

use argot::{ErrorKind, Parser};

/// A demo caller in the shape of a real consumer: a route-search CLI that
/// registers its whole option set up front and reads typed values back.
fn build_parser() -> Parser {
    let mut parser = Parser::new(
        "wayhome",
        "A util for finding routes from city A to city B.",
    );

    parser.add_argument::<String>(None, "apikey", "Schedules API key");
    parser.add_argument::<String>(None, "from", "Departure point: schedules code");
    parser.add_argument::<String>(None, "to", "Arrival point: schedules code");
    parser.add_argument::<String>(None, "date", "Date of departure in \"YYYY-MM-DD\" format");

    parser
        .add_argument::<u32>(None, "limit", "Maximum number of routes in the response")
        .default_value(10);

    parser
        .add_argument::<u32>(None, "transfers", "Maximum number of transfers")
        .default_value(1);

    parser
        .add_argument::<String>(None, "transport", "Transport type")
        .default_value(String::new())
        .default_text("all");

    parser
        .add_argument::<String>(None, "file", "Name of the file routes will be stored to")
        .default_value("wayhome_routes.json".to_owned());

    parser.add_help(Some('h'), "help", "Show help and exit");

    parser
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let mut parser = build_parser();

    if !parser.parse(&argv) {
        // Bare invocation gets the usage message rather than a complaint
        // about missing required options
        if argv.len() == 1 {
            println!("{}", parser.render_help());
            return ExitCode::SUCCESS;
        }

        if let Some(error) = parser.error() {
            match error.kind() {
                ErrorKind::UnknownArgument => eprintln!("{error}"),
                _ => eprintln!("argument error: {error}"),
            }
        }

        return ExitCode::FAILURE;
    }

    if parser.help_requested() {
        println!("{}", parser.render_help());
        return ExitCode::SUCCESS;
    }

    let from = parser.get_value::<String>("from").unwrap_or_default();
    let to = parser.get_value::<String>("to").unwrap_or_default();
    let date = parser.get_value::<String>("date").unwrap_or_default();
    let limit = parser.get_value::<u32>("limit").unwrap_or_default();
    let transfers = parser.get_value::<u32>("transfers").unwrap_or_default();

    println!("searching up to {limit} routes from {from} to {to} on {date} ({transfers} transfers max)");

    ExitCode::SUCCESS
}
