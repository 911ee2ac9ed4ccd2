use swagger_ts::logging::init_tracing;
use swagger_ts::run_cli;

fn main() {
    init_tracing();
    std::process::exit(run_cli(std::env::args().collect()));
}
