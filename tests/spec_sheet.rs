use rigcheck::parse::{self, MemoryKit};
use rigcheck::{
    evaluate, BuildSelection, Case, CaseFormFactor, CoolerKind, CpuCooler, FindingKind,
    FormFactor, GraphicsCard, Memory, MemoryType, Motherboard, PsuFormFactor, Slot, Socket,
};

#[test]
fn catalog_listing_builds_records() {
    let gpu = GraphicsCard::new()
        .length(parse::length_mm("336 mm").unwrap())
        .tdp(parse::watts("320W").unwrap())
        .boost_clock(parse::clock_mhz("2.61 GHz").unwrap());
    assert_eq!(gpu.length_mm, Some(336));
    assert_eq!(gpu.tdp_watts, Some(320.0));
    assert!((gpu.boost_clock_mhz.unwrap() - 2610.0).abs() < 1e-9);

    let kit = parse::memory_kit("32GB (2 x 16GB)").unwrap();
    assert_eq!(
        kit,
        MemoryKit {
            module_count: 2,
            capacity_gb: 32.0
        }
    );

    let spec = parse::memory_spec("DDR5-6000 CL30").unwrap();
    assert_eq!(spec.memory_type, MemoryType::Ddr5);
    assert_eq!(spec.speed_mhz, Some(6000));
}

#[test]
fn parsed_cooler_sockets_drive_the_socket_rule() {
    let mut cooler = CpuCooler::air(parse::length_mm("158mm").unwrap());
    cooler.supported_sockets = parse::socket_list("AM4 / AM5, LGA 1200").unwrap();
    assert_eq!(
        cooler.supported_sockets,
        [Socket::new("AM4"), Socket::new("AM5"), Socket::new("LGA1200")]
    );

    let selection = BuildSelection::new()
        .with(cooler)
        .with(Motherboard::new().socket("LGA1700"));
    let report = evaluate(&selection);
    assert_eq!(
        report.issues()[0].kind(),
        &FindingKind::CoolerSocketUnsupported
    );
}

#[test]
fn enumerated_attributes_from_text() {
    assert_eq!("Micro-ATX".parse::<FormFactor>().unwrap(), FormFactor::MicroAtx);
    assert_eq!(
        "ATX Mid Tower".parse::<CaseFormFactor>().unwrap(),
        CaseFormFactor::Atx
    );
    assert_eq!("SFX".parse::<PsuFormFactor>().unwrap(), PsuFormFactor::Sfx);
    assert_eq!("AIO Liquid".parse::<CoolerKind>().unwrap(), CoolerKind::AioLiquid);
    assert_eq!("graphics card".parse::<Slot>().unwrap(), Slot::GraphicsCard);
    assert_eq!("cpu_cooler".parse::<Slot>().unwrap(), Slot::CpuCooler);
}

#[test]
fn parsed_case_and_board_feed_form_factor_rule() {
    let board = Motherboard::new().form_factor("E-ATX".parse().unwrap());
    let case = Case::new().form_factor("ATX Mid Tower".parse().unwrap());
    let report = evaluate(&BuildSelection::new().with(board).with(case));
    assert_eq!(
        report.warnings()[0].kind(),
        &FindingKind::BoardCaseUnverified
    );
}

#[test]
fn memory_capacity_from_kit_text() {
    let kit = parse::memory_kit("4 x 32GB").unwrap();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let memory = Memory::new()
        .capacity(kit.capacity_gb as u32)
        .modules(kit.module_count);
    let board = Motherboard::new().max_memory(parse::capacity_gb("64GB").unwrap());
    let report = evaluate(&BuildSelection::new().with(memory).with(board));
    assert_eq!(
        report.issues()[0].kind(),
        &FindingKind::MemoryCapacityExceeded
    );
}

#[test]
fn malformed_text_is_rejected() {
    assert!(parse::length_mm("long").is_err());
    assert!(parse::watts("-50W").is_err());
    assert!(parse::memory_kit("a few sticks").is_err());
    assert!(parse::memory_spec("SODIMM").is_err());
    assert!("Open Frame".parse::<CaseFormFactor>().is_err());
    assert!("motherboard tray".parse::<Slot>().is_err());

    let err = parse::clock_mhz("fast").unwrap_err();
    assert!(err.to_string().starts_with("parse error:"));
}
