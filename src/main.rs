use anyhow::{anyhow, bail, Context, Result};
use getopts::Options;
use log::*;
use segtri::*;
use std::time::{Duration, Instant};

struct Args {
    triangle: Triangle,
    ray: Ray,
    iterations: u32,
}

fn default_args() -> Args {
    Args {
        triangle: Triangle::new(
            P3::new(0.0, 0.5, 1.5),
            P3::new(1.0, 0.5, -0.5),
            P3::new(-1.0, 0.5, -0.5),
        ),
        ray: Ray::new(P3::new(0.0, -0.5, 0.0), P3::new(0.0, 1.5, 0.0)),
        iterations: 1,
    }
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("t", "triangle", "triangle vertices", "X,Y,Z;X,Y,Z;X,Y,Z");
    opts.optopt("s", "start", "segment start", "X,Y,Z");
    opts.optopt("e", "end", "segment end", "X,Y,Z");
    opts.optopt("n", "iterations", "repeat the test N times", "N");
    opts.optflag("h", "help", "print this help");
    opts
}

fn parse_point(s: &str) -> Result<P3> {
    let xs = s
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("bad coordinate {:?} in {:?}", c, s))
        })
        .collect::<Result<Vec<_>>>()?;
    if xs.len() != 3 {
        bail!("expected 3 coordinates, got {} in {:?}", xs.len(), s);
    }
    Ok(P3::new(xs[0], xs[1], xs[2]))
}

fn parse_triangle(s: &str) -> Result<Triangle> {
    let ps = s.split(';').map(parse_point).collect::<Result<Vec<_>>>()?;
    if ps.len() != 3 {
        bail!("expected 3 vertices, got {} in {:?}", ps.len(), s);
    }
    Ok(Triangle::new(ps[0], ps[1], ps[2]))
}

/// `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let matches = options().parse(args)?;
    if matches.opt_present("h") {
        return Ok(None);
    }
    if !matches.free.is_empty() {
        bail!("unexpected argument {:?}", matches.free[0]);
    }

    let mut parsed = default_args();
    if let Some(s) = matches.opt_str("t") {
        parsed.triangle = parse_triangle(&s)?;
    }
    if let Some(s) = matches.opt_str("s") {
        parsed.ray.start = parse_point(&s)?;
    }
    if let Some(s) = matches.opt_str("e") {
        parsed.ray.end = parse_point(&s)?;
    }
    if let Some(s) = matches.opt_str("n") {
        parsed.iterations = s
            .trim()
            .parse::<u32>()
            .with_context(|| format!("bad iteration count {:?}", s))?;
        if parsed.iterations == 0 {
            return Err(anyhow!("iteration count must be positive"));
        }
    }
    Ok(Some(parsed))
}

fn format_point(p: &P3) -> String {
    format!("({}, {}, {})", p.x, p.y, p.z)
}

fn run(args: &Args) -> (Option<P3>, Duration) {
    let t1 = Instant::now();
    let mut hit = None;
    for _ in 0..args.iterations {
        hit = intersect(&args.triangle, &args.ray);
    }
    (hit, t1.elapsed())
}

fn main() -> Result<()> {
    env_logger::init();

    let argv = std::env::args().collect::<Vec<_>>();
    let program = argv.first().map(String::as_str).unwrap_or("segtri");
    let usage = options().usage(&format!("Usage: {} [options]", program));
    let args = match parse_args(argv.get(1..).unwrap_or(&[])) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", usage);
            return Ok(());
        }
        Err(e) => {
            eprint!("{}", usage);
            return Err(e);
        }
    };
    debug!("triangle {:?}", args.triangle);
    debug!("ray {:?}", args.ray);

    let (hit, elapsed) = run(&args);
    info!("{} call(s) in {:?}", args.iterations, elapsed);
    match hit {
        Some(p) => println!("hit at {}", format_point(&p)),
        None => println!("no intersection"),
    }
    println!("elapsed: {:?}", elapsed);
    if args.iterations > 1 {
        println!("per call: {:?}", elapsed / args.iterations);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_hit() {
        let parsed = parse_args(&[]).unwrap().unwrap();
        assert_eq!(parsed.iterations, 1);
        let (hit, _) = run(&parsed);
        assert_eq!(format_point(&hit.unwrap()), "(0, 0.5, 0)");
    }

    #[test]
    fn custom_inputs() {
        let parsed = parse_args(&args(&[
            "-t",
            "0,0,0; 1,0,0; 0,1,0",
            "--start",
            "0.25, 0.25, -1",
            "-e",
            "0.25,0.25,1",
            "-n",
            "10",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(parsed.triangle.p1, P3::new(1.0, 0.0, 0.0));
        assert_eq!(parsed.ray.start, P3::new(0.25, 0.25, -1.0));
        assert_eq!(parsed.iterations, 10);
        let (hit, _) = run(&parsed);
        assert_eq!(hit, Some(P3::new(0.25, 0.25, 0.0)));

        let parsed = parse_args(&args(&["-e", "0,0.4,0"])).unwrap().unwrap();
        assert_eq!(run(&parsed).0, None);
    }

    #[test]
    fn help() {
        assert!(parse_args(&args(&["-h"])).unwrap().is_none());
    }

    #[test]
    fn errors() {
        assert!(parse_args(&args(&["-s", "1,2"])).is_err());
        assert!(parse_args(&args(&["-s", "1,2,x"])).is_err());
        assert!(parse_args(&args(&["-t", "0,0,0;1,0,0"])).is_err());
        assert!(parse_args(&args(&["-n", "0"])).is_err());
        assert!(parse_args(&args(&["-n", "many"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["stray"])).is_err());
    }
}
