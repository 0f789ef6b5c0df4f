use blade_icosphere as ico;
use std::io::{self, BufRead as _};

/// Build icosphere meshes and report their buffer sizes.
#[derive(argh::FromArgs)]
struct Args {
    /// subdivision depth to start at
    #[argh(option, default = "0")]
    depth: u32,
    /// deepest level the controller accepts (defaults to the index width limit)
    #[argh(option)]
    max_depth: Option<u32>,
    /// always use 32-bit indices
    #[argh(switch)]
    wide: bool,
    /// read `up`, `down`, `set N` or `quit` commands from stdin
    #[argh(switch)]
    interactive: bool,
}

fn report<I: ico::Index>(controller: &ico::DepthController<I>) {
    let mesh = controller.mesh();
    println!(
        "depth {}/{}: {} vertices, {} triangles, {} edges, {} + {} bytes",
        controller.depth(),
        controller.max_depth(),
        mesh.vertices().len(),
        mesh.triangles().len(),
        mesh.edges().len(),
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len(),
    );
}

fn run<I: ico::Index>(args: &Args, max_depth: u32) -> Result<(), ico::BuildError> {
    let mut controller = ico::DepthController::<I>::new(&ico::ControllerParameters {
        initial_depth: args.depth,
        max_depth,
    })?;
    report(&controller);
    if !args.interactive {
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };
        let mut words = line.split_whitespace();
        let result = match words.next() {
            Some("up") => controller.increase(),
            Some("down") => controller.decrease(),
            Some("set") => match words.next().and_then(|w| w.parse().ok()) {
                Some(depth) => controller.set_depth(depth),
                None => {
                    log::warn!("Usage: set <depth>");
                    continue;
                }
            },
            Some("quit") => break,
            Some(other) => {
                log::warn!("Unknown command: {}", other);
                continue;
            }
            None => continue,
        };
        match result {
            Ok(true) => report(&controller),
            Ok(false) => log::info!("Depth stays at {}", controller.depth()),
            Err(e) => log::error!("{}", e),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let requested = args.max_depth.unwrap_or(args.depth);
    let width = if args.wide {
        ico::IndexWidth::U32
    } else {
        match ico::IndexWidth::select(requested.max(args.depth)) {
            Ok(width) => width,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    };
    let max_depth = args.max_depth.unwrap_or(width.max_depth());
    log::info!("Using {} indices up to depth {}", width.name(), max_depth);

    let result = match width {
        ico::IndexWidth::U16 => run::<u16>(&args, max_depth),
        ico::IndexWidth::U32 => run::<u32>(&args, max_depth),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
