// Terminal host for the country picker.
//
//   country-picker [QUERY...] [--select CODE]
//
// COUNTRY_PICKER_OPTIONS  path to a JSON PickerOptions file
// COUNTRY_PICKER_L10N     path to a JSON code -> name table

use std::process::ExitCode;

use country_picker_lib::{
    CountryCatalog, CountryLocalizations, CountryPicker, LocalizationTable, NoLocalizations,
    PickerError, PickerOptions, PickerOutcome, Row,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("country_picker=info"),
    )
    .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PickerError> {
    let (query, select) = parse_args(std::env::args().skip(1));

    let options = match std::env::var("COUNTRY_PICKER_OPTIONS") {
        Ok(path) => PickerOptions::from_json(&read_file(&path)?)?,
        Err(_) => PickerOptions::default(),
    };
    let table = match std::env::var("COUNTRY_PICKER_L10N") {
        Ok(path) => Some(LocalizationTable::from_json(&read_file(&path)?)?),
        Err(_) => None,
    };
    let l10n: &dyn CountryLocalizations = match &table {
        Some(table) => table,
        None => &NoLocalizations,
    };

    let catalog = CountryCatalog::builtin();
    let mut session = CountryPicker::new(options)?.open(catalog, l10n);
    session.load();
    if !query.is_empty() {
        session.set_query(&query);
    }

    for row in session.rows() {
        match row {
            Row::Favorite(country) => println!("* {}", session.label(country)),
            Row::Divider => println!("{}", "-".repeat(32)),
            Row::Country(country) => println!("  {}", session.label(country)),
        }
    }

    if let Some(code) = select {
        if let PickerOutcome::Selected(country) = session.select(&code)? {
            let json = serde_json::to_string_pretty(&country)
                .map_err(|source| PickerError::Serialize { source })?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Split arguments into the search query and an optional `--select CODE`
fn parse_args(mut args: impl Iterator<Item = String>) -> (String, Option<String>) {
    let mut words = Vec::new();
    let mut select = None;
    while let Some(arg) = args.next() {
        if arg == "--select" {
            select = args.next();
        } else {
            words.push(arg);
        }
    }
    (words.join(" "), select)
}

fn read_file(path: &str) -> Result<String, PickerError> {
    std::fs::read_to_string(path).map_err(|source| PickerError::Io {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args(&[])), (String::new(), None));
        assert_eq!(
            parse_args(args(&["united", "king", "--select", "GB"])),
            ("united king".to_string(), Some("GB".to_string()))
        );
        assert_eq!(parse_args(args(&["--select"])), (String::new(), None));
    }
}
