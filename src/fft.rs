//! Component C: radix-2 decimation-in-frequency FFT over G1, parametric in
//! stride so the same recursion serves both a flat array and the
//! bit-reversal-aware traversal the trusted-setup loader needs.

use crate::bls::fr::Fr;
use crate::bls::g1::G1;
use crate::error::{bad_args, Error};
use crate::fft_settings::FftSettings;

fn fft_g1_recursive(
    out: &mut [G1],
    out_offset: usize,
    input: &[G1],
    in_offset: usize,
    stride_in: usize,
    roots: &[Fr],
    roots_offset: usize,
    stride_roots: usize,
    n: usize,
) {
    if n == 1 {
        out[out_offset] = input[in_offset];
        return;
    }
    let half = n / 2;
    fft_g1_recursive(
        out,
        out_offset,
        input,
        in_offset,
        2 * stride_in,
        roots,
        roots_offset,
        2 * stride_roots,
        half,
    );
    fft_g1_recursive(
        out,
        out_offset + half,
        input,
        in_offset + stride_in,
        2 * stride_in,
        roots,
        roots_offset,
        2 * stride_roots,
        half,
    );
    for i in 0..half {
        let root = roots[roots_offset + i * stride_roots];
        let t = out[out_offset + half + i].mul(root);
        let lo = out[out_offset + i];
        out[out_offset + half + i] = lo.sub(t);
        out[out_offset + i] = lo.add_or_double(t);
    }
}

/// Forward or inverse FFT over G1. `n` must be a power of two not exceeding
/// `fs.max_width`; `stride_roots` is derived as `fs.max_width / n` so a
/// smaller transform still indexes the same precomputed root table.
pub fn fft_g1(output: &mut [G1], input: &[G1], inverse: bool, n: usize, fs: &FftSettings) -> Result<(), Error> {
    if n == 0 || (n & (n - 1)) != 0 {
        return Err(bad_args("fft_g1: n must be a power of two"));
    }
    if n > fs.max_width {
        return Err(bad_args("fft_g1: n exceeds fs.max_width"));
    }
    if input.len() < n || output.len() < n {
        return Err(bad_args("fft_g1: input/output shorter than n"));
    }

    let stride_roots = fs.max_width / n;
    let roots: &[Fr] = if inverse {
        &fs.reverse_roots_of_unity
    } else {
        &fs.expanded_roots_of_unity
    };

    fft_g1_recursive(output, 0, input, 0, 1, roots, 0, stride_roots, n);

    if inverse {
        let n_inv = Fr::from_u64(n as u64).inv()?;
        for point in output[0..n].iter_mut() {
            *point = point.mul(n_inv);
        }
    }
    Ok(())
}
