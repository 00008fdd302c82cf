use super::*;
use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;
use lpg_cli::extensions::format::RouteRequest;

#[test]
fn can_import_csv_stops_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "lpg",
        "import",
        "csv",
        "--input-file",
        STOPS_CSV_PATH,
        "--out-result",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let request: RouteRequest = read_json_result(&tmpfile);
    assert!(request.depot.is_none());
    assert_eq!(request.stops.len(), 7);
    assert_eq!(request.stops[6].address, "Pangani");
}

#[test]
fn cannot_import_missing_file() {
    let matches =
        get_import_app().try_get_matches_from(vec!["import", "csv", "--input-file", "not/existing.csv"]).unwrap();

    let result = run_import(&matches);

    assert!(result.unwrap_err().to_string().starts_with("cannot open input file"));
}
