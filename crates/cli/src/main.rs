use std::{
    io::{self, Read, Write},
    time::Instant,
};

use perron::{ingest, query};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read stdin: {err}");
        std::process::exit(1);
    }

    info!("Loading catalogue...");
    let now = Instant::now();
    let document = match ingest::read_document(input.as_bytes()) {
        Ok(document) => document,
        Err(err) => {
            error!("Bad input document: {err}");
            std::process::exit(1);
        }
    };
    let catalogue = ingest::build_catalogue(&document.base_requests);
    info!("Loading catalogue took {:?}", now.elapsed());

    let answers = query::execute(
        &catalogue,
        &document.render_settings,
        &document.stat_requests,
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &answers).unwrap();
    stdout.write_all(b"\n").unwrap();
}
