extern crate clap;
extern crate num;
extern crate rand;
extern crate seedbrot;

use clap::{App, Arg, ArgMatches};
use num::clamp;
use seedbrot::{Format, Variant};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const FORMAT: &str = "format";
const ITERATIONS: &str = "iterations";
const SEED: &str = "seed";
const VARIANT: &str = "variant";

/// Per-format output maxima.  The BMP path is cheap enough for a
/// desktop-wallpaper raster; the PNG path stores its scanlines
/// uncompressed in a single zlib block, so it is capped well inside
/// the 64KiB stored-block limit.
fn format_maxima(format: Format) -> (usize, usize) {
    match format {
        Format::Bmp => (800, 600),
        Format::Png => (320, 200),
    }
}

const MAX_ITERATIONS: u32 = 800;

fn args<'a>() -> ArgMatches<'a> {
    App::new("seedbrot")
        .version("0.1.0")
        .about("Seeded escape-time fractal image generator")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image (clamped to the format's maximum)"),
        )
        .arg(
            Arg::with_name(FORMAT)
                .required(false)
                .long(FORMAT)
                .short("f")
                .takes_value(true)
                .default_value("bmp")
                .possible_values(&["bmp", "png"])
                .help("Container format"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("200")
                .validator(|s| validate_number::<u32>(&s, "Could not parse iteration count"))
                .help("Iteration cap per pixel (clamped to 800)"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .takes_value(true)
                .validator(|s| validate_number::<u32>(&s, "Could not parse seed"))
                .help("32-bit seed; a random one is drawn and echoed when omitted"),
        )
        .arg(
            Arg::with_name(VARIANT)
                .required(false)
                .long(VARIANT)
                .short("v")
                .takes_value(true)
                .default_value("auto")
                .possible_values(&["auto", "mandelbrot", "julia", "burningship"])
                .help("Iteration rule; 'auto' lets the seed choose"),
        )
        .get_matches()
}

fn write_image(outfile: &str, bytes: &[u8]) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let mut output = File::create(&path)?;
    output.write_all(bytes)?;
    Ok(())
}

fn main() {
    let matches = args();

    let format = Format::from_name(matches.value_of(FORMAT).unwrap());
    let (width, height) =
        parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image size");
    let iterations =
        u32::from_str(matches.value_of(ITERATIONS).unwrap()).expect("Could not parse iterations");
    let variant = Variant::from_name(matches.value_of(VARIANT).unwrap());
    let seed = match matches.value_of(SEED) {
        Some(s) => u32::from_str(s).expect("Could not parse seed"),
        None => rand::random::<u32>(),
    };

    // The library is total over whatever we hand it; bounding the
    // work is this layer's job.
    let (max_width, max_height) = format_maxima(format);
    let width = clamp(width, 1, max_width);
    let height = clamp(height, 1, max_height);
    let iterations = clamp(iterations, 1, MAX_ITERATIONS);

    // Echo the seed so a run can be reproduced exactly.
    eprintln!("seed: {}", seed);

    let image = seedbrot::generate(seed, width, height, iterations, variant, format);
    if let Err(e) = write_image(matches.value_of(OUTPUT).unwrap(), &image.bytes) {
        eprintln!("Could not write {}: {}", matches.value_of(OUTPUT).unwrap(), e);
        std::process::exit(1);
    }
}
