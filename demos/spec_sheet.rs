use rigcheck::parse::{self, ParseError};
use rigcheck::{BuildSelection, Case, CpuCooler, GraphicsCard, Memory, Motherboard};

/// Catalog rows as a storefront might list them.
const GPU_LENGTH: &str = "358 mm";
const GPU_TDP: &str = "355W";
const CASE_GPU_LIMIT: &str = "36 cm";
const CASE_FORM: &str = "ATX Mid Tower";
const BOARD_FORM: &str = "E-ATX";
const BOARD_SOCKET: &str = "LGA 1700";
const BOARD_MEMORY: &str = "DDR5";
const MEMORY_KIT: &str = "64GB (2 x 32GB)";
const MEMORY_SPEC: &str = "DDR5-6400 CL32";
const COOLER_HEIGHT: &str = "165mm";
const COOLER_SOCKETS: &str = "AM4, AM5 / LGA1200";

fn main() -> Result<(), ParseError> {
    let kit = parse::memory_kit(MEMORY_KIT)?;
    let spec = parse::memory_spec(MEMORY_SPEC)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut memory = Memory::new()
        .modules(kit.module_count)
        .capacity(kit.capacity_gb.round() as u32);
    memory.memory_type = Some(spec.memory_type);
    memory.speed_mhz = spec.speed_mhz;

    let mut cooler = CpuCooler::air(parse::length_mm(COOLER_HEIGHT)?);
    cooler.supported_sockets = parse::socket_list(COOLER_SOCKETS)?;

    let build = BuildSelection::new()
        .with(
            GraphicsCard::new()
                .length(parse::length_mm(GPU_LENGTH)?)
                .tdp(parse::watts(GPU_TDP)?),
        )
        .with(
            Case::new()
                .max_gpu_length(parse::length_mm(CASE_GPU_LIMIT)?)
                .form_factor(CASE_FORM.parse()?),
        )
        .with(
            Motherboard::new()
                .socket(BOARD_SOCKET)
                .memory_type(BOARD_MEMORY.parse()?)
                .form_factor(BOARD_FORM.parse()?),
        )
        .with(memory)
        .with(cooler);

    print!("{}", rigcheck::evaluate(&build));
    Ok(())
}
