use std::cell::RefCell;
use std::rc::Rc;

use argot::{ArgumentStatus, ErrorKind, Parser};

fn parser() -> Parser {
    Parser::new("prog", "")
}

#[test]
fn equivalent_option_spellings() {
    for argv in [
        vec!["prog", "--limit", "42"],
        vec!["prog", "--limit=42"],
        vec!["prog", "-l", "42"],
        vec!["prog", "-l=42"],
        vec!["prog", "-l42"],
    ] {
        let mut parser = parser();
        parser.add_argument::<u32>(Some('l'), "limit", "");

        assert!(parser.parse(&argv), "failed to parse {argv:?}");
        assert_eq!(parser.get_value::<u32>("limit"), Some(42), "for {argv:?}");
    }
}

#[test]
fn clustered_flags_set_all_members() {
    let mut parser = parser();
    parser.add_argument::<bool>(Some('a'), "all", "");
    parser.add_argument::<bool>(Some('b'), "brief", "");

    assert!(parser.parse(["prog", "-ab"]));
    assert_eq!(parser.get_value::<bool>("all"), Some(true));
    assert_eq!(parser.get_value::<bool>("brief"), Some(true));
}

#[test]
fn attached_short_value() {
    let mut parser = parser();
    parser.add_argument::<String>(Some('x'), "expr", "");

    assert!(parser.parse(["prog", "-xHELLO"]));
    assert_eq!(parser.get_value::<String>("expr").as_deref(), Some("HELLO"));
}

#[test]
fn insufficient_multi_value_detected() {
    let mut parser = parser();
    parser.add_argument::<u32>(None, "ids", "").multi_value(2);

    assert!(!parser.parse(["prog", "--ids=1"]));
    assert!(parser.has_error());
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::Insufficient);
    assert_eq!(parser.error().unwrap().option(), Some("ids"));
}

#[test]
fn default_fallback_when_never_supplied() {
    let mut parser = parser();
    parser.add_argument::<i32>(None, "limit", "").default_value(10);

    assert!(parser.parse(["prog"]));
    assert_eq!(parser.get_value::<i32>("limit"), Some(10));
    assert_eq!(parser.value_status("limit"), Some(ArgumentStatus::Success));
}

#[test]
fn help_short_circuits_missing_required_options() {
    let mut parser = parser();
    parser.add_argument::<String>(None, "apikey", "");
    parser.add_help(None, "help", "");

    assert!(parser.parse(["prog", "--help"]));
    assert!(parser.help_requested());

    // The validation pass still runs, so error state reflects the
    // unfulfilled requirement
    assert!(parser.has_error());
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::NoArgument);
    assert_eq!(parser.error().unwrap().option(), Some("apikey"));
}

#[test]
fn parser_is_reusable() {
    let mut parser = parser();
    parser.add_argument::<u32>(Some('l'), "limit", "").default_value(1);
    parser.add_argument::<bool>(Some('v'), "verbose", "");
    parser.add_help(None, "help", "");

    assert!(parser.parse(["prog", "-v", "--limit=5", "--help"]));
    assert!(parser.help_requested());
    assert_eq!(parser.get_value::<u32>("limit"), Some(5));

    // No residue from the first vector
    assert!(parser.parse(["prog"]));
    assert!(!parser.help_requested());
    assert!(!parser.has_error());
    assert_eq!(parser.get_value::<u32>("limit"), Some(1));
    assert_eq!(parser.get_value::<bool>("verbose"), Some(false));
    assert_eq!(parser.values_set("limit"), Some(0));
}

#[test]
fn positional_distribution_with_trailing_multi_value() {
    let mut parser = parser();
    parser.add_argument::<String>(None, "first", "").positional();
    parser.add_argument::<String>(None, "second", "").positional();
    parser
        .add_argument::<String>(None, "rest", "")
        .positional()
        .multi_value(0);

    assert!(parser.parse(["prog", "t1", "t2", "t3", "t4", "t5"]));
    assert_eq!(parser.get_value::<String>("first").as_deref(), Some("t1"));
    assert_eq!(parser.get_value::<String>("second").as_deref(), Some("t2"));
    assert_eq!(parser.get_value_at::<String>("rest", 0).as_deref(), Some("t3"));
    assert_eq!(parser.get_value_at::<String>("rest", 1).as_deref(), Some("t4"));
    assert_eq!(parser.get_value_at::<String>("rest", 2).as_deref(), Some("t5"));
    assert_eq!(parser.values_set("rest"), Some(3));
}

#[test]
fn double_dash_forces_positional() {
    let mut parser = parser();
    parser.add_argument::<bool>(Some('v'), "verbose", "");
    parser
        .add_argument::<String>(None, "words", "")
        .positional()
        .multi_value(0);

    assert!(parser.parse(["prog", "-v", "--", "-v", "--verbose"]));
    assert_eq!(parser.get_value::<bool>("verbose"), Some(true));
    assert_eq!(parser.get_value_at::<String>("words", 0).as_deref(), Some("-v"));
    assert_eq!(
        parser.get_value_at::<String>("words", 1).as_deref(),
        Some("--verbose")
    );
}

#[test]
fn unknown_tokens_fail_the_parse() {
    let mut parser = parser();
    parser.add_argument::<bool>(Some('v'), "verbose", "");

    assert!(!parser.parse(["prog", "--nope"]));
    let error = parser.error().unwrap();
    assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    assert_eq!(error.token(), Some("--nope"));

    // Stray positional token with no positional arguments registered
    assert!(!parser.parse(["prog", "stray"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::UnknownArgument);
    assert_eq!(parser.error().unwrap().token(), Some("stray"));
}

#[test]
fn named_argument_rejected_as_positional_and_vice_versa() {
    let mut parser = parser();
    parser.add_argument::<String>(Some('p'), "path", "").positional();

    // A positional argument addressed by name is unknown
    assert!(!parser.parse(["prog", "--path=x"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::UnknownArgument);
}

#[test]
fn coercion_failure_reports_invalid_argument() {
    let mut parser = parser();
    parser.add_argument::<u32>(Some('l'), "limit", "");

    assert!(!parser.parse(["prog", "--limit", "many"]));
    let error = parser.error().unwrap();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.token(), Some("many"));
    assert_eq!(error.option(), Some("limit"));
    assert_eq!(
        parser.value_status("limit"),
        Some(ArgumentStatus::InvalidArgument)
    );
}

#[test]
fn flag_rejects_attached_characters() {
    let mut parser = parser();
    parser.add_argument::<bool>(Some('v'), "verbose", "");

    assert!(!parser.parse(["prog", "-v5"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::UnknownArgument);

    assert!(!parser.parse(["prog", "-v=x"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::UnknownArgument);
}

#[test]
fn cluster_with_inline_value_is_ambiguous() {
    let mut parser = parser();
    parser.add_argument::<String>(Some('a'), "alpha", "");
    parser.add_argument::<String>(Some('b'), "beta", "");

    assert!(!parser.parse(["prog", "-ab=v"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::UnknownArgument);
}

#[test]
fn fully_resolved_cluster_beats_attached_value() {
    // Both `x` and `a` are registered, so `-xa` reads as the cluster
    // [x, a], not as `x` with the attached value "a". `x` still picks up
    // "a" as its attached remainder once dispatched.
    let mut parser = parser();
    parser.add_argument::<String>(Some('x'), "expr", "");
    parser.add_argument::<bool>(Some('a'), "all", "");

    assert!(parser.parse(["prog", "-xa"]));
    assert_eq!(parser.get_value::<String>("expr").as_deref(), Some("a"));
    assert_eq!(parser.get_value::<bool>("all"), Some(true));

    // Only a strict prefix resolves: the remainder is an attached value
    assert!(parser.parse(["prog", "-xqq"]));
    assert_eq!(parser.get_value::<String>("expr").as_deref(), Some("qq"));
    assert_eq!(parser.get_value::<bool>("all"), Some(false));
}

#[test]
fn multi_value_positional_starves_later_positionals() {
    // A multi-value positional that isn't registered last absorbs every
    // remaining token; later positionals silently receive nothing. Existing
    // behavior, deliberately preserved.
    let mut parser = parser();
    parser
        .add_argument::<String>(None, "everything", "")
        .positional()
        .multi_value(0);
    parser.add_argument::<String>(None, "after", "").positional();

    assert!(!parser.parse(["prog", "a", "b", "c"]));
    assert_eq!(parser.values_set("everything"), Some(3));
    assert_eq!(parser.values_set("after"), Some(0));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::NoArgument);
    assert_eq!(parser.error().unwrap().option(), Some("after"));
}

#[test]
fn bound_storage_observed_by_caller() {
    let limit = Rc::new(RefCell::new(0u32));
    let files = Rc::new(RefCell::new(Vec::new()));

    let mut parser = parser();
    parser
        .add_argument::<u32>(Some('l'), "limit", "")
        .store_value(Rc::clone(&limit));
    parser
        .add_argument::<String>(None, "files", "")
        .positional()
        .multi_value(1)
        .store_values(Rc::clone(&files));

    assert!(parser.parse(["prog", "-l", "3", "a.txt", "b.txt"]));
    assert_eq!(*limit.borrow(), 3);
    assert_eq!(*files.borrow(), vec!["a.txt".to_owned(), "b.txt".to_owned()]);
}

#[test]
fn empty_tokens_are_skipped() {
    let mut parser = parser();
    parser.add_argument::<u32>(Some('l'), "limit", "").default_value(2);

    assert!(parser.parse(["prog", "", "--limit=9", ""]));
    assert_eq!(parser.get_value::<u32>("limit"), Some(9));
}

#[test]
fn bare_dash_is_positional() {
    let mut parser = parser();
    parser.add_argument::<String>(None, "input", "").positional();

    assert!(parser.parse(["prog", "-"]));
    assert_eq!(parser.get_value::<String>("input").as_deref(), Some("-"));
}

#[test]
fn missing_required_option_reported_in_registration_order() {
    let mut parser = parser();
    parser.add_argument::<String>(None, "first", "");
    parser.add_argument::<String>(None, "second", "");

    assert!(!parser.parse(["prog", "--second=x"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::NoArgument);
    assert_eq!(parser.error().unwrap().option(), Some("first"));
}

#[test]
fn reregistration_replaces_argument_and_remaps_short() {
    let mut parser = parser();
    parser.add_argument::<u32>(Some('l'), "limit", "old");
    parser.add_argument::<String>(Some('m'), "limit", "new");

    // The old short name no longer resolves
    assert!(!parser.parse(["prog", "-l", "5"]));
    assert_eq!(parser.error().unwrap().kind(), ErrorKind::UnknownArgument);

    assert!(parser.parse(["prog", "-m", "five"]));
    assert_eq!(parser.get_value::<String>("limit").as_deref(), Some("five"));

    // The replaced argument's type is gone with it
    assert_eq!(parser.get_value::<u32>("limit"), None);
}

#[test]
fn values_set_counts_occurrences() {
    let mut parser = parser();
    parser.add_argument::<u32>(Some('i'), "ids", "").multi_value(0);

    assert!(parser.parse(["prog", "-i1", "--ids=2", "--ids", "3"]));
    assert_eq!(parser.values_set("ids"), Some(3));
    assert_eq!(parser.get_value_at::<u32>("ids", 2), Some(3));

    assert_eq!(parser.values_set("nope"), None);
    assert_eq!(parser.value_status("nope"), None);
}

#[test]
fn wrong_type_retrieval_is_none() {
    let mut parser = parser();
    parser.add_argument::<u32>(None, "limit", "").default_value(4);

    assert!(parser.parse(["prog"]));
    assert_eq!(parser.get_value::<String>("limit"), None);
    assert_eq!(parser.get_value::<u32>("limit"), Some(4));
}

#[test]
fn help_rendering_lists_options_and_usage() {
    let mut parser = Parser::new("wayhome", "Find routes.");
    parser
        .add_argument::<u32>(Some('l'), "limit", "Maximum number of routes")
        .default_value(10);
    parser
        .add_argument::<String>(None, "stops", "Stops along the way")
        .multi_value(2);
    parser.add_argument::<String>(None, "from", "").positional();
    parser
        .add_argument::<String>(None, "to", "")
        .positional()
        .multi_value(0);
    parser.add_help(Some('h'), "help", "Show help and exit");

    let help = parser.render_help();

    assert!(help.starts_with("wayhome\nFind routes.\n"));
    assert!(help.contains("Usage: wayhome [OPTIONS] <from> <to>..."));
    assert!(help.contains("-l, --limit=<uint>"));
    assert!(help.contains("Maximum number of routes [default = 10]"));
    assert!(help.contains("    --stops=<string>"));
    assert!(help.contains("[repeated, min values = 2]"));
    assert!(help.contains("-h, --help "));
    assert!(!help.contains("--help=<"));
    // The help flag's implicit default isn't advertised
    assert!(!help.contains("Show help and exit [default"));
    // Positional arguments don't get option lines
    assert!(!help.contains("--from"));
}
