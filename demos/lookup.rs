//! Geocode addresses from the command line.
//!
//! Reads the API key from `GOOGLE_MAPS_API_KEY` and geocodes every argument.
//!
//! Run with: GOOGLE_MAPS_API_KEY=... RUST_LOG=debug cargo run --example lookup -- "1600 Amphitheatre Parkway, Mountain View, CA"

use gmaps_geocode::{Error, Geocoder, GeocoderConfig, Location};

fn print_location(location: &Location) {
    if let Some(address) = location.address() {
        println!("  Address: {}", address);
    }
    if let Some((lat, lng)) = location.coordinates() {
        println!("  Coordinates: {:.7}, {:.7}", lat, lng);
    }
    let mut components: Vec<_> = location.components().into_iter().collect();
    components.sort();
    for (name, value) in components {
        if name != "address" {
            println!("  {}: {}", name, value);
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    println!("gmaps-geocode Lookup Example");
    println!("============================\n");

    let geocoder = Geocoder::with_config(GeocoderConfig::from_env()?)?;

    let mut addresses: Vec<String> = std::env::args().skip(1).collect();
    if addresses.is_empty() {
        addresses.push("1600 Amphitheatre Parkway, Mountain View, CA".to_string());
    }

    for address in &addresses {
        println!("Input: {}", address);
        match geocoder.lookup(address) {
            Ok(Some(location)) => print_location(&location),
            Ok(None) => println!("  No match"),
            Err(e) => println!("  Error: {}", e),
        }
        println!();
    }

    println!("Example complete!");
    Ok(())
}
