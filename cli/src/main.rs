use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use zipe::Preset;

mod pipeline;
use pipeline::Pipeline;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Modulus {
    Toy,
    P128,
    Modp2048,
}

impl From<Modulus> for Preset {
    fn from(value: Modulus) -> Preset {
        match value {
            Modulus::Toy => Preset::Toy,
            Modulus::P128 => Preset::P128,
            Modulus::Modp2048 => Preset::Modp2048,
        }
    }
}

/// Arguments of the program
#[derive(Parser)]
struct Cli {
    /// Group modulus
    #[clap(long, value_enum, default_value = "p128")]
    preset: Modulus,
    /// Dimension of the policy and attribute vectors
    #[clap(long, default_value_t = 5)]
    length: i64,
    #[clap(long, default_value = "Hello, ABE!")]
    message: String,
    /// Use a policy vector that is not orthogonal to the attributes
    #[clap(long, action)]
    mismatch: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    debug!("Using preset {:?}", args.preset);

    let pipeline = Pipeline::new(Preset::from(args.preset), args.length)?;
    info!("Authority set up for {} coordinates", args.length);

    let recovered = pipeline.run(args.message.as_bytes(), args.mismatch)?;

    println!("Recovered message: {}", String::from_utf8_lossy(&recovered));
    Ok(())
}
