// hcecard/src/ndef/capability.rs

use crate::constants::{
    CC_LEN, CC_MAPPING_VERSION, CC_MAX_C_APDU, CC_MAX_NDEF_SIZE, CC_MAX_R_APDU,
    CC_NDEF_FILE_CONTROL_LEN, CC_NDEF_FILE_CONTROL_TAG, CC_READ_ACCESS_ALWAYS,
    CC_WRITE_ACCESS_NEVER, NDEF_FILE_ID,
};

pub const CAPABILITY_CONTAINER_LEN: usize = CC_LEN as usize;

/// Type 4 Tag Capability Container (file E103).
///
/// ```text
/// 00 0F        CCLEN
/// 20           mapping version 2.0
/// 00 FF        MLe
/// 00 FF        MLc
/// 04 06        NDEF File Control TLV
///   E1 04      NDEF file id
///   00 FF      max NDEF size
///   00         read access: always
///   FF         write access: never
/// ```
pub const fn capability_container() -> [u8; CAPABILITY_CONTAINER_LEN] {
    let cclen = CC_LEN.to_be_bytes();
    let mle = CC_MAX_R_APDU.to_be_bytes();
    let mlc = CC_MAX_C_APDU.to_be_bytes();
    let file = NDEF_FILE_ID.to_be_bytes();
    let max = CC_MAX_NDEF_SIZE.to_be_bytes();
    [
        cclen[0],
        cclen[1],
        CC_MAPPING_VERSION,
        mle[0],
        mle[1],
        mlc[0],
        mlc[1],
        CC_NDEF_FILE_CONTROL_TAG,
        CC_NDEF_FILE_CONTROL_LEN,
        file[0],
        file[1],
        max[0],
        max[1],
        CC_READ_ACCESS_ALWAYS,
        CC_WRITE_ACCESS_NEVER,
    ]
}
