#![no_main]
use arbitrary::Arbitrary;
use isqrt_kernels::{Algorithm, Word};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub enum Operand {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

fn check(n: u64, roots: impl Iterator<Item = (Algorithm, Option<u64>)>) {
    let wide = u128::from(n);
    for (alg, root) in roots {
        let Some(r) = root else {
            assert!(n == 0 || alg.max_bits() < 64, "{alg} rejected {n}");
            continue;
        };
        let r = u128::from(r);
        if alg.is_exact() {
            assert!(r * r <= wide && wide < (r + 1) * (r + 1), "{alg}({n}) = {r}");
        } else {
            assert!(r.abs_diff(wide.isqrt()) <= 1, "{alg}({n}) = {r}");
        }
    }
}

fn roots<T: Word>(n: T) -> impl Iterator<Item = (Algorithm, Option<u64>)> {
    Algorithm::ALL
        .iter()
        .map(move |alg| (*alg, alg.isqrt(n).map(Word::widen_u64)))
}

fuzz_target!(|operand: Operand| {
    match operand {
        Operand::U8(n) => check(n.into(), roots(n)),
        Operand::U16(n) => check(n.into(), roots(n)),
        Operand::U32(n) => check(n.into(), roots(n)),
        Operand::U64(n) => check(n, roots(n)),
    }
});
