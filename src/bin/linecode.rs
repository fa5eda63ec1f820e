use clap::Parser;
use linecode::level::to_values;
use linecode::waveform::render_text;
use linecode::{EncoderConfig, Scheme};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Encode a bit string with a line code and plot the waveform.
#[derive(Parser, Debug)]
#[command(name = "linecode")]
#[command(about = "Encode a binary string with NRZ-L, NRZ-I, RZ, Manchester or Differential Manchester")]
struct Args {
    /// Bits to encode, e.g. 11001.
    bits: String,

    /// Scheme name, or "all" for every scheme.
    #[arg(long, short, default_value = "manchester")]
    scheme: String,

    /// NRZ-I level before the first bit (1 or -1).
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    initial_level: i8,

    /// Differential Manchester: previous transition was high-to-low.
    #[arg(long)]
    initial_hl: bool,

    /// Plot columns per sample.
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Debug logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::TRACE } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let schemes = if args.scheme.eq_ignore_ascii_case("all") {
        Scheme::ALL.to_vec()
    } else {
        vec![args.scheme.parse::<Scheme>()?]
    };
    let config = EncoderConfig {
        initial_level: args.initial_level,
        initial_transition_is_lh: !args.initial_hl,
    };

    for scheme in schemes {
        let signal = scheme.encode(&args.bits, &config)?;
        println!("{scheme} ({}): {:?}", args.bits, to_values(&signal));
        let plot = render_text(&signal, args.width);
        if !plot.is_empty() {
            println!("{plot}\n");
        }
    }
    Ok(())
}
