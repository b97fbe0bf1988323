//! A small generator of random, well-formed JSON documents used for property-style tests.
//!
//! Unlike a pure fuzz-seed generator, object keys here are guaranteed unique: this port rejects
//! duplicate keys as a parse error, so a generator that could produce them would make failures
//! here ambiguous between "the generator produced garbage" and "the parser has a real bug."

use rand::Rng;
use std::fmt::Write;

pub fn json_value() -> String {
    let mut s = String::new();
    let mut d = 0;

    write_any(&mut s, &mut d);

    s
}

fn write_any(s: &mut String, d: &mut usize) {
    if *d < 6 {
        match rng(6) {
            0 => write_object(s, d),
            1 => write_array(s, d),
            2 => write_bool(s),
            3 => write_number(s),
            4 => write_null(s),
            5 => write_string(s),
            _ => unreachable!(),
        }
    } else {
        match rng(4) {
            0 => write_bool(s),
            1 => write_number(s),
            2 => write_null(s),
            3 => write_string(s),
            _ => unreachable!(),
        }
    }
}

fn write_object(s: &mut String, d: &mut usize) {
    *d += 1;
    s.push('{');

    let mut seen = Vec::new();
    let mut first = true;
    for i in 0..rng(6) {
        if !first {
            s.push(',');
        }
        first = false;

        let key = format!("k{i}{}", rng(1_000_000));
        seen.push(key.clone());

        s.push('"');
        s.push_str(&key);
        s.push('"');
        s.push(':');
        write_any(s, d);
    }

    s.push('}');
    *d -= 1;
}

fn write_array(s: &mut String, d: &mut usize) {
    *d += 1;
    s.push('[');

    let mut first = true;
    for _ in 0..rng(6) {
        if !first {
            s.push(',');
        }
        first = false;

        write_any(s, d);
    }

    s.push(']');
    *d -= 1;
}

fn write_null(s: &mut String) {
    s.push_str("null");
}

fn write_bool(s: &mut String) {
    s.push_str(if rng_bool() { "true" } else { "false" });
}

fn write_string(s: &mut String) {
    s.push('"');

    for _ in 0..rng(10) {
        match rng(95) {
            0..=50 => {
                let i = rng(STR_1.len());
                s.push_str(&STR_1[i..i + 1]);
            }
            51..=60 => s.push_str(STR_2),
            61..=70 => s.push_str(STR_3),
            71..=80 => s.push_str(STR_4),
            _ => s.push_str(&STR_0[0..rng(STR_0.len())]),
        }
    }

    s.push('"');
}

fn write_number(s: &mut String) {
    if rng_bool() {
        s.push('-');
    }

    match rng(3) {
        0 => write_integer(s),
        1 => write_decimal(s),
        2 => write_scientific(s),
        _ => unreachable!(),
    }
}

fn write_integer(s: &mut String) {
    write!(s, "{}", rng_u32()).unwrap();
}

fn write_decimal(s: &mut String) {
    // Keep precision low enough that floats round-trip.
    write!(s, "{}.{}", rng_u32(), rng(300)).unwrap();
}

fn write_scientific(s: &mut String) {
    let e = match rng(4) {
        0 => "e",
        1 => "e-",
        2 => "E",
        3 => "E-",
        _ => unreachable!(),
    };

    // Keep the exponent small enough to stay representable in f64.
    write!(s, "{}.{}{}{}", rng(10), rng(300), e, rng(7)).unwrap();
}

fn rng(to: usize) -> usize {
    rand::thread_rng().gen_range(0..to.max(1))
}

fn rng_bool() -> bool {
    rand::random()
}

fn rng_u32() -> u32 {
    rand::thread_rng().gen_range(0..1_000_000)
}

const STR_0: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

const STR_1: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 ";

const STR_2: &str = "\\\"";

const STR_3: &str = "\\u58c1";

const STR_4: &str = "壁";
