use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy lakes.csv to OUT_DIR for include_str. The fallback keeps the
    // app buildable from a bare checkout without the survey fixture.
    let lakes_src = Path::new("../fixtures/lakes.csv");
    if lakes_src.exists() {
        fs::copy(lakes_src, Path::new(&out_dir).join("lakes.csv")).unwrap();
        println!("cargo:rerun-if-changed=../fixtures/lakes.csv");
    } else {
        fs::write(
            Path::new(&out_dir).join("lakes.csv"),
            "SITE_ID,LON_DD,LAT_DD,ECO_NUTA,LAKE_ORIGIN,DEPTH_CLASS,LOG_NTL\n\
             NLA06608-0001,-89.6975,45.5268,Upper Midwest,NATURAL,DEEP,6.4615\n\
             NLA06608-0002,-114.0292,34.2782,Xeric,MAN_MADE,DEEP,6.1527\n",
        )
        .unwrap();
    }
}
