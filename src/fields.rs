//! Constants of the two supported primes p = 2^e2 * 3^e3 - 1 and of the
//! starting curve E0 : y^2 = x^3 + x over GF(p^2).
//!
//! Torsion bases are given by x-coordinates only: x(P), x(Q) and x(P - Q).
//! PA and PB have x-coordinates in GF(p^2) \ GF(p); QA and QB have
//! x-coordinates in GF(p). QA lies in E0(GF(p)), which is cyclic, so
//! [2^(e2-1)]QA = (0, 0) and kernels PA + [m]QA never lie above (0, 0).
//! [2^(e2-1)]PA is (i, 0) or (-i, 0), so the first 4-isogeny of every
//! walk is a regular one.

pub mod Fp503 {
    const N: usize = 8;
    const BITLEN: usize = 503;
    const MODULUS: [u64; N] = [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xABFFFFFFFFFFFFFF,
        0x13085BDA2211E7A0, 0x1B9BF6C87B7E7DAF, 0x6045C6BDDA77A4D0, 0x004066F541811E1E,
    ];

    crate::finitefield::fp_gen::define_fp_core! {}
}

pub mod Fp503Ext {
    pub use super::Fp503::Fp;

    crate::finitefield::fp2_gen::define_fp2_core! {}

    /// p + 1 = 2^E2 * 3^E3
    pub const E2: usize = 250;
    pub const E3: usize = 159;

    /// Montgomery coefficient of the starting curve
    pub const A0: Fp2 = Fp2::ZERO;

    // x([3^159]P) for P with x(P) = 4 + i
    pub const XPA: Fp2 = Fp2::w64le(
        [
            0x8BE82209D2DDFCA9, 0xB97DA14657AE8C12, 0x2D12103E4B8B8CD2, 0xEEB47FF3113F6088,
            0xE45299D8939959EA, 0x75DBB7382EB29E24, 0x356B98A116A0CA97, 0x001F6D52A7563BB9,
        ],
        [
            0xEB6C65A8E06E53E9, 0x19C6B0C08ED92B5A, 0xFA2B87DD55C8CA60, 0xC91F38E1AF4C2D5B,
            0x5C33AB26D60A268A, 0x2A9912EE6D09E2DD, 0xBDDC8A2D9DE336A9, 0x002D44C3FAD24E4C,
        ],
    );
    // x([3^159]P) for P with x(P) = 14
    pub const XQA: Fp2 = Fp2::w64le(
        [
            0x86E55C45E3BB46B1, 0x5273EC980981325D, 0xAD61A14B60DB2612, 0x2D6E60A62FD62417,
            0x9858CADEFAE382E4, 0x3D3BBBF399137BD3, 0xDAF32EEFFD618BD9, 0x00097453912E12F3,
        ],
        [0; 8],
    );
    // x(PA - QA)
    pub const XRA: Fp2 = Fp2::w64le(
        [
            0xAD7B54F8DDB5CD06, 0x948A72B30BDD7CEB, 0xEC9D147BADD96126, 0xC72D1D4A99E13353,
            0xA7E80DFC2875E77E, 0xACE1F53F8FFB97D2, 0x78FD1ED5FE36075A, 0x00173775ECBEC79C,
        ],
        [
            0xAEEED1CB59FE5015, 0x5D28E36C1B1CB994, 0x99CBAE051797B4D3, 0xF90E4FBE7E266BBA,
            0x97DBC1C8ED0EBB0F, 0x1D068ECA203465CE, 0x9BBBB9089D2B2C47, 0x0002EAA224DDDA14,
        ],
    );

    // x([2^250]P) for P with x(P) = 7 + i
    pub const XPB: Fp2 = Fp2::w64le(
        [
            0xA2E22D6D89D66A4E, 0xDD7ED98B9793685F, 0x9B51E0D9821B0A67, 0x7B8514822730940C,
            0x6A7409F41156CB5F, 0x0CFF9DF6D4DF86D8, 0xD88708B729837E87, 0x0021B7098B640A01,
        ],
        [
            0x391F57364F402909, 0xB53821D3E8012F7F, 0xE669730F3E8569CE, 0x42FC6C5734B9FCFD,
            0x9804B8D17A17000A, 0xC3F07E4DF3CC5234, 0x3851F75B7AB5D89F, 0x002F37F575BEBBC3,
        ],
    );
    // x([2^250]P) for P with x(P) = 6
    pub const XQB: Fp2 = Fp2::w64le(
        [
            0x0A23B4B3787EF08F, 0x7E39B6997F70023E, 0x106BDF745894C14D, 0xB2CD1A12089C2ECE,
            0xDF55CAF4B6E01903, 0xA971CDF3EC61E009, 0xC47779AFFD696A88, 0x001E7D6EBCEEC9CF,
        ],
        [0; 8],
    );
    // x(PB - QB)
    pub const XRB: Fp2 = Fp2::w64le(
        [
            0x53F52259A7B7D70E, 0xDEBBAC8C2A9ABBE7, 0xB1907310BFE6784F, 0x5B5E887E17226417,
            0x0C8C06323EEEC2FA, 0xF24F4BBB2C16FACC, 0xBF48DB51D129E6B1, 0x000D4818D120A24A,
        ],
        [
            0x1C16724C8C356777, 0xEDC233E908218578, 0x021D90414433ABBE, 0xAAF57EA7682B9957,
            0x130CB567CA532F69, 0x89E5155BABB8BF0C, 0x22CBBF153747525D, 0x0019E75F0F03312D,
        ],
    );
}

pub mod Fp751 {
    const N: usize = 12;
    const BITLEN: usize = 751;
    const MODULUS: [u64; N] = [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xEEAFFFFFFFFFFFFF, 0xE3EC968549F878A8, 0xDA959B1A13F7CC76,
        0x084E9867D6EBE876, 0x8562B5045CB25748, 0x0E12909F97BADC66, 0x00006FE5D541F71C,
    ];

    crate::finitefield::fp_gen::define_fp_core! {}
}

pub mod Fp751Ext {
    pub use super::Fp751::Fp;

    crate::finitefield::fp2_gen::define_fp2_core! {}

    /// p + 1 = 2^E2 * 3^E3
    pub const E2: usize = 372;
    pub const E3: usize = 239;

    /// Montgomery coefficient of the starting curve
    pub const A0: Fp2 = Fp2::ZERO;

    // x([3^239]P) for P with x(P) = 5 + i
    pub const XPA: Fp2 = Fp2::w64le(
        [
            0x9A36B39572AFB363, 0x401FFC738B03A49E, 0x747C146775C0267A, 0x5C0BE072950D16CA,
            0x52828FF50C3F7B75, 0xF207FCF3CDD26736, 0xD46563F042FA06B9, 0xABE5C0FFFCBE6E1A,
            0xC6E375DA69B0682C, 0xDF2E7F0D55761363, 0x9531CB890FC5EC66, 0x000054921C31F0DC,
        ],
        [
            0x3AD752CDCD73BF66, 0x3BEBE649C18101F0, 0x57C6D43B799811A6, 0xA1DBAD8CA47BB7E7,
            0x44D652EFC4729178, 0xF7852B7DF02C3348, 0xBA1A177500E9EB5A, 0x86B6D4A9B751797C,
            0xCCF63DFE623092AC, 0x633C4E97AB4FF118, 0x01993137A5B63D6E, 0x000028849BC0D81E,
        ],
    );
    // x([3^239]P) for P with x(P) = 11
    pub const XQA: Fp2 = Fp2::w64le(
        [
            0x4B0346F5CCE233E9, 0x632646086CE3ACD5, 0x5661D14AB7347693, 0xA58A20449AF1F133,
            0xB9AC2F40C56D6FA4, 0x8E561E008FA0E3F3, 0x6CAE096D5DB822C9, 0x83FDB7A4AD3E83E8,
            0xB1317AD904386217, 0x3FA23F89F6BE06D2, 0x429C8D36FF46BCC9, 0x00003E82027A38E9,
        ],
        [0; 12],
    );
    // x(PA - QA)
    pub const XRA: Fp2 = Fp2::w64le(
        [
            0x32EEF2AE178CEFDD, 0x4385B8FC53743964, 0x6E45E4055940E3C9, 0x9F920F238336E5A3,
            0x6B2D2D84F636548A, 0x0011A4AC138F62EF, 0xDCE5888D83B623BF, 0x14A1B7B0C87AC875,
            0x9F374362A8ECA3AB, 0x97964A7C6226FE90, 0x0C56135A7CEC5CFB, 0x000022A0B5A35A2B,
        ],
        [
            0x528DD491B83D9547, 0x5485372E51382D44, 0x026CBB4A592EC74B, 0xC4D2786646D914AD,
            0xBA6C6DFB4D0A00AA, 0xEA33FEB56796F011, 0xC63365EED14AA3F6, 0x6483F320B793F2EB,
            0x711AA4EFEC49A4E7, 0x9B20310FDF2EF631, 0x9C3358B096B250C6, 0x00000F9C4AFCDA80,
        ],
    );

    // x([2^372]P) for P with x(P) = 2 + i
    pub const XPB: Fp2 = Fp2::w64le(
        [
            0x9BC5E00052F78E8D, 0x4368699394C43BFC, 0x4CF45098A578DEB4, 0xBE685A127D40E45F,
            0x95CF04DD8CE4A08F, 0xDAA9EB108B3CD004, 0x63B3798075FCEE6E, 0xF4BCC6C689B8E4C0,
            0x21ECA46BD10A5CC9, 0x9152BC7098B9E2B1, 0xF630974196FED351, 0x000005FD1A3C4DD0,
        ],
        [
            0x837424922275ACBF, 0x1D2357C10B9A6C8F, 0x9026C64A6ED61050, 0x87D699D2BF79BA55,
            0x4B537974CFA0BA82, 0x821AA39333A60AF8, 0x3BB7DB936394EC33, 0x0C06A1D86FF5457D,
            0x211BE887CC43FCB8, 0x5DEA6516881FE108, 0x389547732C9140C0, 0x00002B88A03360B3,
        ],
    );
    // x([2^372]P) for P with x(P) = 6
    pub const XQB: Fp2 = Fp2::w64le(
        [
            0x76ED2325DCC93103, 0xD9E1DF566C1D26D3, 0x76AECB94B919AEED, 0xD3785AAAA4D646C5,
            0xCB610E30288A7770, 0x9BD3778659023B9E, 0xD5E69CF26DF23742, 0xA3AD8E17B9F9238C,
            0xE145FE2D525160E0, 0xF8D5BCE859ED725D, 0x960A01AB8FF409A2, 0x00002F1D80EF06EF,
        ],
        [0; 12],
    );
    // x(PB - QB)
    pub const XRB: Fp2 = Fp2::w64le(
        [
            0x2FE5B71306704829, 0xFDD1727E2C31125B, 0x46559458878F41F9, 0xE70C0A1EBF633BA9,
            0xCD395575CD7CCD3C, 0x91F2057202328712, 0x33D54041D8BCAEA2, 0x2B3C3D00D52CCD31,
            0x017B32DF58A7252C, 0x9715F547454F88CD, 0x428A327D43CA6016, 0x0000077B3BB69009,
        ],
        [
            0x2576FC0FB4074B9F, 0x76C22D80C95E42B1, 0xDCC6C34454D44969, 0x1ADDE5BD1FD5B681,
            0x68687FA3F85AE93A, 0x539B167D73BBA321, 0x6DEACA10B1AA808D, 0x38D2A4792DFF9BC8,
            0x2A75B0F168855BCC, 0xCD719CAE1D33C683, 0xF47FD6DCF841F17E, 0x00006D91393A57DB,
        ],
    );
}
