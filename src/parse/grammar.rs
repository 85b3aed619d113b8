use winnow::ascii::{dec_uint, float, space0, Caseless};
use winnow::combinator::{alt, delimited, opt, preceded, separated, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{one_of, rest, take_while};

use crate::types::{FormFactor, MemoryType, PsuFormFactor, Socket};

use super::{MemoryKit, MemorySpec};

// -- Whitespace & numbers ---------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    space0.void().parse_next(input)
}

fn magnitude(input: &mut &str) -> ModalResult<f64> {
    preceded(ws, float::<_, f64, _>)
        .verify(|v: &f64| v.is_finite() && *v >= 0.0)
        .context(StrContext::Expected(StrContextValue::Description(
            "non-negative number",
        )))
        .parse_next(input)
}

fn count(input: &mut &str) -> ModalResult<u32> {
    preceded(ws, dec_uint::<_, u32, _>)
        .context(StrContext::Expected(StrContextValue::Description("count")))
        .parse_next(input)
}

// -- Quantities with units --------------------------------------------------

pub(crate) fn length_mm(input: &mut &str) -> ModalResult<f64> {
    let value = magnitude.parse_next(input)?;
    let scale = opt(preceded(
        ws,
        alt((Caseless("mm").value(1.0), Caseless("cm").value(10.0))),
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    Ok(value * scale.unwrap_or(1.0))
}

pub(crate) fn watts(input: &mut &str) -> ModalResult<f64> {
    let value = magnitude.parse_next(input)?;
    opt(preceded(
        ws,
        alt((Caseless("watts"), Caseless("watt"), Caseless("w"))),
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    Ok(value)
}

/// Clock speed in MHz. A bare number below 100 is read as GHz.
pub(crate) fn clock_mhz(input: &mut &str) -> ModalResult<f64> {
    let value = magnitude.parse_next(input)?;
    let scale = opt(preceded(
        ws,
        alt((
            Caseless("ghz").value(1000.0),
            Caseless("mhz").value(1.0),
            Caseless("mt/s").value(1.0),
        )),
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    let scale = scale.unwrap_or(if value < 100.0 { 1000.0 } else { 1.0 });
    Ok(value * scale)
}

pub(crate) fn capacity_gb(input: &mut &str) -> ModalResult<f64> {
    let value = magnitude.parse_next(input)?;
    let scale = opt(preceded(
        ws,
        alt((
            Caseless("tb").value(1024.0),
            Caseless("gb").value(1.0),
            Caseless("mb").value(1.0 / 1024.0),
        )),
    ))
    .parse_next(input)?;
    Ok(value * scale.unwrap_or(1.0))
}

// -- Memory -----------------------------------------------------------------

fn multiplied_kit(input: &mut &str) -> ModalResult<MemoryKit> {
    let modules = count.parse_next(input)?;
    preceded(ws, one_of(['x', 'X', '*', '×'])).parse_next(input)?;
    let per_module = capacity_gb.parse_next(input)?;
    Ok(MemoryKit::new(modules, per_module * f64::from(modules)))
}

fn single_kit(input: &mut &str) -> ModalResult<MemoryKit> {
    let total = capacity_gb.parse_next(input)?;
    let detail = opt(delimited((ws, '('), multiplied_kit, (ws, ')'))).parse_next(input)?;
    Ok(match detail {
        Some(kit) => MemoryKit::new(kit.module_count, total),
        None => MemoryKit::new(1, total),
    })
}

pub(crate) fn memory_kit(input: &mut &str) -> ModalResult<MemoryKit> {
    terminated(alt((multiplied_kit, single_kit)), ws)
        .context(StrContext::Expected(StrContextValue::Description(
            "memory kit such as '2 x 16GB'",
        )))
        .parse_next(input)
}

pub(crate) fn memory_spec(input: &mut &str) -> ModalResult<MemorySpec> {
    ws.parse_next(input)?;
    let low_power = opt(Caseless("lp")).parse_next(input)?.is_some();
    Caseless("ddr")
        .context(StrContext::Expected(StrContextValue::StringLiteral("DDR")))
        .parse_next(input)?;
    let generation = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let suffix = take_while(0.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    let speed = opt(preceded(opt(one_of(['-', ' '])), count)).parse_next(input)?;
    // Timings and other trailing detail ("CL30", "MHz") are not needed.
    rest.void().parse_next(input)?;

    let label = format!(
        "{}DDR{}{}",
        if low_power { "LP" } else { "" },
        generation,
        suffix.to_ascii_uppercase()
    );
    Ok(MemorySpec {
        memory_type: MemoryType::from_label(&label),
        speed_mhz: speed,
    })
}

// -- Sockets ----------------------------------------------------------------

fn socket_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '.' | ' ' | '\t')
    })
    .parse_next(input)
}

pub(crate) fn socket_list(input: &mut &str) -> ModalResult<Vec<Socket>> {
    let tokens: Vec<&str> = terminated(
        separated(0.., socket_token, one_of([',', '/', ';', '|'])),
        ws,
    )
    .parse_next(input)?;
    Ok(tokens
        .into_iter()
        .map(Socket::new)
        .filter(|socket| !socket.is_empty())
        .collect())
}

// -- Form factors (input is normalized: lowercase alphanumerics) -------------

pub(crate) fn board_form_factor(input: &mut &str) -> ModalResult<FormFactor> {
    alt((
        alt(("miniitx", "itx")).value(FormFactor::MiniItx),
        alt(("microatx", "matx", "uatx")).value(FormFactor::MicroAtx),
        alt(("extendedatx", "eatx")).value(FormFactor::EAtx),
        "atx".value(FormFactor::Atx),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "motherboard form factor",
    )))
    .parse_next(input)
}

pub(crate) fn psu_form_factor(input: &mut &str) -> ModalResult<PsuFormFactor> {
    alt((
        "sfxl".value(PsuFormFactor::SfxL),
        "sfx".value(PsuFormFactor::Sfx),
        "tfx".value(PsuFormFactor::Tfx),
        "flexatx".value(PsuFormFactor::FlexAtx),
        "atx".value(PsuFormFactor::Atx),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "power supply form factor",
    )))
    .parse_next(input)
}
