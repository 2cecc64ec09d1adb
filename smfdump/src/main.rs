use midi_arena::{MidiFile, ReadError};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

const MIDI_EXT: &[&str] = &["mid", "midi", "rmi"];

fn list_midis(dir: &Path) -> Result<Vec<PathBuf>, ReadError> {
    let mut midis = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if MIDI_EXT
            .iter()
            .any(|ext| path.extension() == Some(ext.as_ref()))
        {
            midis.push(path);
        }
    }
    midis.sort();
    Ok(midis)
}

/// Decode a single file and print its full listing.
fn dump(path: &Path) -> Result<(), ReadError> {
    let start = Instant::now();
    let file = MidiFile::read_file(path)?;
    let took = start.elapsed();
    let layout = file.layout();
    eprintln!(
        "{}: {} tracks, {} events, {} arena bytes in {}ms",
        path.display(),
        file.track_count(),
        file.event_count(),
        layout.total_bytes(),
        (took.as_micros() as f64) / 1000.0
    );
    print!("{}", file.listing());
    Ok(())
}

/// Decode every midi file in a directory at once, printing a summary line per file.
fn survey(dir: &Path) -> Result<(), ReadError> {
    let paths = list_midis(dir)?;
    let raws = paths
        .iter()
        .map(fs::read)
        .collect::<Result<Vec<_>, _>>()?;
    let start = Instant::now();
    let results = midi_arena::decode_batch(&raws);
    let took = start.elapsed();
    let mut failed = 0;
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(file) => println!(
                "{}: {} tracks / {} events / {} bytes",
                path.display(),
                file.track_count(),
                file.event_count(),
                file.layout().total_bytes()
            ),
            Err(err) => {
                failed += 1;
                println!("{}: {}", path.display(), err);
            }
        }
    }
    eprintln!(
        "decoded {} files ({} failed) in {}ms",
        paths.len(),
        failed,
        (took.as_micros() as f64) / 1000.0
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let target = match env::args_os().nth(1) {
        Some(target) => PathBuf::from(target),
        None => {
            eprintln!("usage: smfdump <file.mid | directory>");
            process::exit(2);
        }
    };
    log::debug!("dumping {}", target.display());

    let result = if target.is_dir() {
        survey(&target)
    } else {
        dump(&target)
    };
    if let Err(err) = result {
        eprintln!("error: {}", err);
        if let ReadError::Decode(err) = &err {
            eprintln!("  {}", err);
        }
        process::exit(1);
    }
}
