use netcalc::codec::Ipv4Format;
use netcalc::models::VlsmRequirement;
use netcalc::output;
use std::error::Error;

/// Output rendering selected on the command line.
#[derive(PartialEq)]
enum Render {
    Terminal,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Keep main thin; all computation lives in the library.
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let render = take_render_flag(&mut args);

    let Some(command) = args.first().cloned() else {
        return Err(usage());
    };
    let rest = &args[1..];

    match command.as_str() {
        "subnet" => {
            let [cidr] = rest else { return Err(usage()) };
            let report = netcalc::ipv4_summary(cidr)?;
            match render {
                Render::Terminal => output::print_ipv4_report(&report),
                Render::Json => println!("{}", output::to_json(&report)?),
                Render::Csv => print!("{}", output::ipv4_report_csv(&report)),
            }
        }
        "ipv6" => {
            let [text] = rest else { return Err(usage()) };
            let report = netcalc::ipv6_summary(text)?;
            match render {
                Render::Terminal => output::print_ipv6_report(&report),
                Render::Json => println!("{}", output::to_json(&report)?),
                Render::Csv => print!("{}", output::ipv6_report_csv(&report)),
            }
        }
        "eui64" => {
            let (mac, prefix) = match rest {
                [mac] => (mac, None),
                [mac, prefix] => (mac, Some(prefix.as_str())),
                _ => return Err(usage()),
            };
            let report = netcalc::eui64_summary(mac, prefix)?;
            match render {
                Render::Terminal => output::print_eui64_report(&report),
                Render::Json => println!("{}", output::to_json(&report)?),
                Render::Csv => print!("{}", output::eui64_report_csv(&report)),
            }
        }
        "vlsm" => {
            let [base, specs @ ..] = rest else { return Err(usage()) };
            if specs.is_empty() {
                return Err(usage());
            }
            let requirements = parse_requirements(specs)?;
            let plan = netcalc::vlsm_summary(base, &requirements)?;
            match render {
                Render::Terminal => output::print_vlsm_plan(&plan),
                Render::Json => println!("{}", output::to_json(&plan)?),
                Render::Csv => print!("{}", output::vlsm_plan_csv(&plan)),
            }
            if !plan.success {
                std::process::exit(1);
            }
        }
        "convert" => {
            let [value, format] = rest else { return Err(usage()) };
            let report = netcalc::convert_ipv4(value, Ipv4Format::from_name(format)?)?;
            match render {
                Render::Terminal => {
                    println!("dotted   {}", report.dotted);
                    println!("decimal  {}", report.decimal);
                    println!("binary   {}", report.binary);
                    println!("hex      {}", report.hex);
                }
                Render::Json => println!("{}", output::to_json(&report)?),
                Render::Csv => {
                    println!("Property,Value");
                    println!("dotted,{}", report.dotted);
                    println!("decimal,{}", report.decimal);
                    println!("binary,{}", report.binary);
                    println!("hex,{}", report.hex);
                }
            }
        }
        _ => return Err(usage()),
    }

    Ok(())
}

/// Pull `--json` / `--csv` out of the argument list.
fn take_render_flag(args: &mut Vec<String>) -> Render {
    let mut render = Render::Terminal;
    args.retain(|a| match a.as_str() {
        "--json" => {
            render = Render::Json;
            false
        }
        "--csv" => {
            render = Render::Csv;
            false
        }
        _ => true,
    });
    render
}

/// Turn `name=hosts` arguments into requirements with generated ids.
fn parse_requirements(specs: &[String]) -> Result<Vec<VlsmRequirement>, Box<dyn Error>> {
    let mut requirements = Vec::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        let Some((name, hosts)) = spec.split_once('=') else {
            return Err(format!("expected name=hosts, got \"{spec}\"").into());
        };
        let hosts_required: u64 = hosts
            .parse()
            .map_err(|_| format!("\"{hosts}\" is not a host count"))?;
        requirements.push(VlsmRequirement {
            id: format!("req-{}", i + 1),
            name: name.to_string(),
            hosts_required,
            description: None,
        });
    }
    Ok(requirements)
}

fn usage() -> Box<dyn Error> {
    "usage: netcalc [--json|--csv] <command>\n\
     \n\
     commands:\n\
       subnet  <a.b.c.d/n>              IPv4 subnet report\n\
       ipv6    <addr[/prefix]>          IPv6 subnet report (default /64)\n\
       eui64   <mac> [prefix]           EUI-64 derivation (default fe80::)\n\
       vlsm    <base/n> <name=hosts>..  VLSM plan\n\
       convert <value> <format>         IPv4 between dotted|decimal|binary|hex"
        .into()
}
