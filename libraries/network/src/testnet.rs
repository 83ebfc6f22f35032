use std::collections::BTreeMap;

use dexter::{asset::AssetInfo, pool::PoolKind};

use crate::{Error, Network, PoolDescriptor};

const FEE_DENOM: &str = "uxprt";

const VAULT: &str =
    "persistence1jyhyqjxf3pc7vzwyqhwe53up5pj0e53zw3xu2589uqgkvqngswnqgrmstf";

const TOKEN_A: &str =
    "persistence1u2zdjcczjrenwmf57fmrpensk4the84azdm05m3unm387rm8asdsh0yf27";

const TOKEN_B: &str =
    "persistence1rtdulljz3dntzpu085c7mzre9dg4trgdddu4tqk7uuuvu6xrfu8s8wcs45";

const TOKEN_C: &str =
    "persistence13hwj6afyxgue26f966hd5jkcvvjeruv7f9cdtd5d9mrtyrnn73ysyxvc8c";

const TOKEN_D: &str =
    "persistence1gd54cnu80s8qdqcyhyvn06m87vlmch2uf4wvz4z08svawvc2rhysgvav55";

const STABLE_R: &str =
    "persistence1rl8su3hadqqq2v86lscpuklsh2mh84cxqvjdew4jt9yd07dzekyq85jyzr";

const STABLE_V: &str =
    "persistence1vguuxez2h5ekltfj9gjd62fs5k4rl2zy5hfrncasykzw08rezpfst7tmng";

const STABLE_H: &str =
    "persistence1vhjnzk9ly03dugffvzfcwgry4dgc8x0sv0nqqtfxj3ajn7rn5ghqtpaner";

#[derive(Clone, Copy)]
enum Asset {
    Token(&'static str),
    Native,
}

struct Pool {
    name: &'static str,
    id: u64,
    kind: PoolKind,
    label: &'static str,
    pool_address: &'static str,
    lp_token_address: &'static str,
    assets: &'static [Asset],
}

const POOLS: &[Pool] = &[
    Pool {
        name: "pool1",
        id: 15,
        kind: PoolKind::Xyk {},
        label: "xyk",
        pool_address: "persistence1ut5qjunqrj6pnmg9vjlm8eufulquzdgqfw4xtg02kez0fdmzn9sqv804rp",
        lp_token_address: "persistence1xk0s8xgktn9x5vwcgtjdxqzadg88fgn33p8u9cnpdxwemvxscvasejtgv7",
        assets: &[Asset::Token(TOKEN_A), Asset::Native],
    },
    Pool {
        name: "pool2",
        id: 19,
        kind: PoolKind::Xyk {},
        label: "xyk_2",
        pool_address: "persistence1xvcthy3yrjaeg4y29c5zd2ckefgx99h2ge5ppxtwslnvyqwar7aq2lzgpz",
        lp_token_address: "persistence15ul08t80lm6kp6fs424e3c9gg6eys7wcvkyl6lud45ulfl0fxrnsjdek2u",
        assets: &[Asset::Token(TOKEN_A), Asset::Token(TOKEN_B)],
    },
    Pool {
        name: "pool3",
        id: 20,
        kind: PoolKind::Stableswap {},
        label: "stableswap",
        pool_address: "persistence1k528kg8h3q56j5yazshv39fafmhjzl4540u7w36g6q2amgyrpwpsvexl2d",
        lp_token_address: "persistence1jdsm42szlkrsnht95w4xesk5yluud2rge9vr4vuv84sxd9w32uwsvv0lvh",
        assets: &[Asset::Token(TOKEN_A), Asset::Token(TOKEN_B)],
    },
    Pool {
        name: "pool4",
        id: 4,
        kind: PoolKind::Stableswap {},
        label: "stableswap_2",
        pool_address: "persistence1acrmqqyqq9gwcy2upegzncahqwnzjzy89pssyt0s3ghwsrrqy94srfsw6r",
        lp_token_address: "persistence1kj45m8j2pqrqlw67tqde8lduzla7me38fps8tzzjl2emgp90f0gqjjf5sk",
        assets: &[Asset::Token(STABLE_V), Asset::Native],
    },
    Pool {
        name: "pool5",
        id: 5,
        kind: PoolKind::Stable5swap {},
        label: "stable5swap",
        pool_address: "persistence1a7pjjyvng22a8msatp4zj6ut9tmsd9qvp26gaj7tnrjrqtx7yafqm7ezny",
        lp_token_address: "persistence17jllkv6clrkrwsuyxpya505rnhzwenkr4njw3um5eyqjuqm4twzqlt82eh",
        assets: &[Asset::Token(STABLE_R), Asset::Token(STABLE_V)],
    },
    Pool {
        name: "pool6",
        id: 6,
        kind: PoolKind::Stable5swap {},
        label: "stable5swap_2",
        pool_address: "persistence1aexzn458dzh0lnuqdtzjtacq6tacnluz9ky643xdvw67en2yh97sjq6txg",
        lp_token_address: "persistence18yqlanxjqxx5lr8r43hsvjf0wyrlec3r8rpxgm2svrh52mzmlh4scappxa",
        assets: &[
            Asset::Token(STABLE_R),
            Asset::Token(STABLE_V),
            Asset::Token(STABLE_H),
            Asset::Native,
        ],
    },
    Pool {
        name: "pool7",
        id: 7,
        kind: PoolKind::Weighted {},
        label: "weighted",
        pool_address: "persistence1j5h5zftg5su7ytz74f7rryl4f6x3p78lh907fw39eqhax75r94jsgj4n54",
        lp_token_address: "persistence1ejycngcuqyw2h8afhlzkq0cmjegpt96x583jh99anjzeut2rm4sqf0x4wk",
        assets: &[
            Asset::Token(STABLE_R),
            Asset::Token(STABLE_V),
            Asset::Token(STABLE_H),
            Asset::Native,
        ],
    },
];

pub(crate) fn network() -> Result<Network, Error> {
    POOLS
        .iter()
        .map(|pool| {
            PoolDescriptor::new(
                pool.id,
                pool.kind,
                pool.label,
                pool.pool_address,
                pool.lp_token_address,
                pool.assets
                    .iter()
                    .map(|&asset| match asset {
                        Asset::Token(address) => AssetInfo::token(address),
                        Asset::Native => AssetInfo::native(FEE_DENOM),
                    })
                    .collect(),
            )
            .map(|descriptor| (pool.name.into(), descriptor))
        })
        .collect::<Result<BTreeMap<_, _>, Error>>()
        .and_then(|pools| {
            Network {
                name: "testnet".into(),
                chain_id: "test-core-1".into(),
                fee_denom: FEE_DENOM.into(),
                account_prefix: "persistence".into(),
                grpc_endpoint: "https://grpc.testnet.persistence.one:443".into(),
                rest_endpoint: "http://rest.testnet.persistence.one".into(),
                vault_address: VAULT.into(),
                test_tokens: [TOKEN_A, TOKEN_B, TOKEN_C, TOKEN_D]
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                pools,
            }
            .validated()
        })
}
