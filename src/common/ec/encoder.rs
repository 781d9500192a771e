use super::galois::GF;

// Generator polynomial
//------------------------------------------------------------------------------

// Product of (x - 2^i) for i in 0..degree, highest order coefficient first.
// The leading coefficient is always 1.
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut gen = Vec::with_capacity(degree + 1);
    gen.push(1u8);
    for i in 0..degree {
        gen = poly_mul(&gen, &[1, GF.exp(i)]);
    }
    gen
}

fn poly_mul(p: &[u8], q: &[u8]) -> Vec<u8> {
    let mut res = vec![0u8; p.len() + q.len() - 1];
    for (j, &b) in q.iter().enumerate() {
        for (i, &a) in p.iter().enumerate() {
            res[i + j] ^= GF.mul(a, b);
        }
    }
    res
}

// ECC: Error Correction Codeword generator
//------------------------------------------------------------------------------

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
pub fn ecc(data: &[u8], ecc_count: usize) -> Vec<u8> {
    let len = data.len();
    let gen_poly = generator_polynomial(ecc_count);

    let mut res = data.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }

        for (u, &v) in res[i..].iter_mut().zip(gen_poly.iter()) {
            *u ^= GF.mul(v, lead_coeff);
        }
    }

    res.split_off(len)
}
