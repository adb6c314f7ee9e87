// Generated seed table for the built-in OID registry.
// Hand-authored in the shape a build-time generator would emit
// (see obj_dat.c / objects.txt in the OpenSSL source this crate's
// registry semantics are grounded on); not produced by tooling in
// this crate. See DESIGN.md.

use crate::entry::BuiltinOidDef;

/// Number of entries in the built-in table, including the `UNDEF` sentinel
/// at index 0 and any holes. The first dynamically-allocated NID.
pub const BUILTIN_COUNT: u32 = 86;

pub(crate) static BUILTIN_BY_NID: &[BuiltinOidDef] = &[
    BuiltinOidDef { nid: 0, der: &[], sn: None, ln: Some("undefined") },
    BuiltinOidDef { nid: 1, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d], sn: Some("rsadsi"), ln: Some("RSA Data Security, Inc.") },
    BuiltinOidDef { nid: 2, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01], sn: Some("pkcs"), ln: Some("RSA Data Security, Inc. PKCS") },
    BuiltinOidDef { nid: 3, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01], sn: None, ln: Some("pkcs1") },
    BuiltinOidDef { nid: 4, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01], sn: Some("rsaEncryption"), ln: Some("rsaEncryption") },
    BuiltinOidDef { nid: 5, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x02], sn: Some("RSA-MD2"), ln: Some("md2WithRSAEncryption") },
    BuiltinOidDef { nid: 6, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x04], sn: Some("RSA-MD5"), ln: Some("md5WithRSAEncryption") },
    BuiltinOidDef { nid: 7, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x05], sn: Some("RSA-SHA1"), ln: Some("sha1WithRSAEncryption") },
    BuiltinOidDef { nid: 8, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b], sn: Some("RSA-SHA256"), ln: Some("sha256WithRSAEncryption") },
    BuiltinOidDef { nid: 9, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0c], sn: Some("RSA-SHA384"), ln: Some("sha384WithRSAEncryption") },
    BuiltinOidDef { nid: 10, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0d], sn: Some("RSA-SHA512"), ln: Some("sha512WithRSAEncryption") },
    BuiltinOidDef { nid: 11, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07], sn: None, ln: Some("pkcs7") },
    BuiltinOidDef { nid: 12, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x01], sn: Some("pkcs7-data"), ln: Some("pkcs7-data") },
    BuiltinOidDef { nid: 0, der: &[], sn: None, ln: None }, // hole (nid 13)
    BuiltinOidDef { nid: 14, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x02], sn: Some("pkcs7-signedData"), ln: Some("pkcs7-signedData") },
    BuiltinOidDef { nid: 15, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x03], sn: Some("pkcs7-envelopedData"), ln: Some("pkcs7-envelopedData") },
    BuiltinOidDef { nid: 16, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09], sn: None, ln: Some("pkcs9") },
    BuiltinOidDef { nid: 17, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x01], sn: Some("emailAddress"), ln: Some("emailAddress") },
    BuiltinOidDef { nid: 18, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x03], sn: Some("contentType"), ln: Some("contentType") },
    BuiltinOidDef { nid: 19, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x04], sn: Some("messageDigest"), ln: Some("messageDigest") },
    BuiltinOidDef { nid: 20, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x05], sn: Some("signingTime"), ln: Some("signingTime") },
    BuiltinOidDef { nid: 21, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x02], sn: Some("MD2"), ln: Some("md2") },
    BuiltinOidDef { nid: 22, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05], sn: Some("MD5"), ln: Some("md5") },
    BuiltinOidDef { nid: 23, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x03, 0x02], sn: Some("RC2-CBC"), ln: Some("rc2-cbc") },
    BuiltinOidDef { nid: 24, der: &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x03, 0x04], sn: Some("RC4"), ln: Some("rc4") },
    BuiltinOidDef { nid: 25, der: &[0x2a, 0x86, 0x48, 0xce, 0x38, 0x04, 0x01], sn: Some("DSA"), ln: Some("dsaEncryption") },
    BuiltinOidDef { nid: 26, der: &[0x2a, 0x86, 0x48, 0xce, 0x38, 0x04, 0x03], sn: Some("DSA-SHA1"), ln: Some("dsaWithSHA1") },
    BuiltinOidDef { nid: 27, der: &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01], sn: Some("id-ecPublicKey"), ln: Some("id-ecPublicKey") },
    BuiltinOidDef { nid: 28, der: &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x01], sn: Some("prime192v1"), ln: Some("prime192v1") },
    BuiltinOidDef { nid: 29, der: &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07], sn: Some("prime256v1"), ln: Some("prime256v1") },
    BuiltinOidDef { nid: 30, der: &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02], sn: Some("ecdsa-with-SHA256"), ln: Some("ecdsa-with-SHA256") },
    BuiltinOidDef { nid: 31, der: &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x03], sn: Some("ecdsa-with-SHA384"), ln: Some("ecdsa-with-SHA384") },
    BuiltinOidDef { nid: 32, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x01], sn: None, ln: Some("id-pe") },
    BuiltinOidDef { nid: 33, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01], sn: Some("serverAuth"), ln: Some("TLS Web Server Authentication") },
    BuiltinOidDef { nid: 34, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x02], sn: Some("clientAuth"), ln: Some("TLS Web Client Authentication") },
    BuiltinOidDef { nid: 35, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x03], sn: Some("codeSigning"), ln: Some("Code Signing") },
    BuiltinOidDef { nid: 36, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x04], sn: Some("emailProtection"), ln: Some("E-mail Protection") },
    BuiltinOidDef { nid: 37, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01], sn: Some("OCSP"), ln: Some("OCSP") },
    BuiltinOidDef { nid: 38, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01, 0x01], sn: Some("basicOCSPResponse"), ln: Some("Basic OCSP Response") },
    BuiltinOidDef { nid: 39, der: &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x02], sn: Some("caIssuers"), ln: Some("CA Issuers") },
    BuiltinOidDef { nid: 40, der: &[0x2b, 0x0e, 0x03, 0x02, 0x1a], sn: Some("SHA1"), ln: Some("sha1") },
    BuiltinOidDef { nid: 41, der: &[0x2b, 0x0e, 0x03, 0x02, 0x07], sn: Some("desCBC"), ln: Some("desCBC") },
    BuiltinOidDef { nid: 42, der: &[0x2b, 0x65, 0x6e], sn: Some("X25519"), ln: Some("X25519") },
    BuiltinOidDef { nid: 43, der: &[0x2b, 0x65, 0x6f], sn: Some("X448"), ln: Some("X448") },
    BuiltinOidDef { nid: 44, der: &[0x2b, 0x65, 0x70], sn: Some("ED25519"), ln: Some("ED25519") },
    BuiltinOidDef { nid: 45, der: &[0x2b, 0x65, 0x71], sn: Some("ED448"), ln: Some("ED448") },
    BuiltinOidDef { nid: 46, der: &[0x55, 0x04, 0x03], sn: Some("CN"), ln: Some("commonName") },
    BuiltinOidDef { nid: 47, der: &[0x55, 0x04, 0x04], sn: Some("SN"), ln: Some("surname") },
    BuiltinOidDef { nid: 48, der: &[0x55, 0x04, 0x05], sn: Some("serialNumber"), ln: Some("serialNumber") },
    BuiltinOidDef { nid: 49, der: &[0x55, 0x04, 0x06], sn: Some("C"), ln: Some("countryName") },
    BuiltinOidDef { nid: 50, der: &[0x55, 0x04, 0x07], sn: Some("L"), ln: Some("localityName") },
    BuiltinOidDef { nid: 51, der: &[0x55, 0x04, 0x08], sn: Some("ST"), ln: Some("stateOrProvinceName") },
    BuiltinOidDef { nid: 52, der: &[0x55, 0x04, 0x09], sn: Some("street"), ln: Some("streetAddress") },
    BuiltinOidDef { nid: 53, der: &[0x55, 0x04, 0x0a], sn: Some("O"), ln: Some("organizationName") },
    BuiltinOidDef { nid: 54, der: &[0x55, 0x04, 0x0b], sn: Some("OU"), ln: Some("organizationalUnitName") },
    BuiltinOidDef { nid: 55, der: &[0x55, 0x04, 0x0c], sn: Some("title"), ln: Some("title") },
    BuiltinOidDef { nid: 56, der: &[0x55, 0x04, 0x0d], sn: Some("description"), ln: Some("description") },
    BuiltinOidDef { nid: 0, der: &[], sn: None, ln: None }, // hole (nid 57)
    BuiltinOidDef { nid: 58, der: &[0x55, 0x04, 0x29], sn: Some("name"), ln: Some("name") },
    BuiltinOidDef { nid: 59, der: &[0x55, 0x04, 0x2a], sn: Some("GN"), ln: Some("givenName") },
    BuiltinOidDef { nid: 60, der: &[0x55, 0x04, 0x2b], sn: Some("initials"), ln: Some("initials") },
    BuiltinOidDef { nid: 61, der: &[0x55, 0x04, 0x2d], sn: Some("x500UniqueIdentifier"), ln: Some("x500UniqueIdentifier") },
    BuiltinOidDef { nid: 62, der: &[0x55, 0x04, 0x2e], sn: Some("dnQualifier"), ln: Some("dnQualifier") },
    BuiltinOidDef { nid: 63, der: &[0x55, 0x04, 0x41], sn: Some("pseudonym"), ln: Some("pseudonym") },
    BuiltinOidDef { nid: 64, der: &[0x55, 0x1d, 0x0e], sn: Some("subjectKeyIdentifier"), ln: Some("X509v3 Subject Key Identifier") },
    BuiltinOidDef { nid: 65, der: &[0x55, 0x1d, 0x0f], sn: Some("keyUsage"), ln: Some("X509v3 Key Usage") },
    BuiltinOidDef { nid: 66, der: &[0x55, 0x1d, 0x10], sn: Some("privateKeyUsagePeriod"), ln: Some("X509v3 Private Key Usage Period") },
    BuiltinOidDef { nid: 67, der: &[0x55, 0x1d, 0x11], sn: Some("subjectAltName"), ln: Some("X509v3 Subject Alternative Name") },
    BuiltinOidDef { nid: 68, der: &[0x55, 0x1d, 0x12], sn: Some("issuerAltName"), ln: Some("X509v3 Issuer Alternative Name") },
    BuiltinOidDef { nid: 69, der: &[0x55, 0x1d, 0x13], sn: Some("basicConstraints"), ln: Some("X509v3 Basic Constraints") },
    BuiltinOidDef { nid: 70, der: &[0x55, 0x1d, 0x14], sn: Some("crlNumber"), ln: Some("X509v3 CRL Number") },
    BuiltinOidDef { nid: 71, der: &[0x55, 0x1d, 0x15], sn: Some("CRLReason"), ln: Some("X509v3 CRL Reason Code") },
    BuiltinOidDef { nid: 72, der: &[0x55, 0x1d, 0x1f], sn: Some("crlDistributionPoints"), ln: Some("X509v3 CRL Distribution Points") },
    BuiltinOidDef { nid: 73, der: &[0x55, 0x1d, 0x20], sn: Some("certificatePolicies"), ln: Some("X509v3 Certificate Policies") },
    BuiltinOidDef { nid: 74, der: &[0x55, 0x1d, 0x23], sn: Some("authorityKeyIdentifier"), ln: Some("X509v3 Authority Key Identifier") },
    BuiltinOidDef { nid: 75, der: &[0x55, 0x1d, 0x24], sn: Some("policyConstraints"), ln: Some("X509v3 Policy Constraints") },
    BuiltinOidDef { nid: 76, der: &[0x55, 0x1d, 0x25], sn: Some("extendedKeyUsage"), ln: Some("X509v3 Extended Key Usage") },
    BuiltinOidDef { nid: 77, der: &[0x55, 0x1d, 0x2e], sn: Some("freshestCRL"), ln: Some("X509v3 Freshest CRL") },
    BuiltinOidDef { nid: 78, der: &[0x55, 0x1d, 0x36], sn: Some("inhibitAnyPolicy"), ln: Some("X509v3 Inhibit Any Policy") },
    BuiltinOidDef { nid: 79, der: &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x01, 0x02], sn: Some("AES-128-CBC"), ln: Some("aes-128-cbc") },
    BuiltinOidDef { nid: 80, der: &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x01, 0x2a], sn: Some("AES-256-CBC"), ln: Some("aes-256-cbc") },
    BuiltinOidDef { nid: 81, der: &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01], sn: Some("SHA256"), ln: Some("sha256") },
    BuiltinOidDef { nid: 82, der: &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02], sn: Some("SHA384"), ln: Some("sha384") },
    BuiltinOidDef { nid: 83, der: &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03], sn: Some("SHA512"), ln: Some("sha512") },
    BuiltinOidDef { nid: 84, der: &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x04], sn: Some("SHA224"), ln: Some("sha224") },
    BuiltinOidDef { nid: 85, der: &[], sn: Some("undefined-placeholder"), ln: None },
];

// sorted by (len, bytes) per spec comparator
pub(crate) static BUILTIN_BY_DER: &[u32] = &[
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 41, 40, 1, 2, 25, 26, 27, 32, 3, 11, 16, 21, 22, 23, 24, 28, 29, 30, 31, 33, 34, 35, 36, 37, 39, 4, 5, 6, 7, 8, 9, 10, 12, 14, 15, 17, 18, 19, 20, 38, 79, 80, 81, 82, 83, 84,
];

pub(crate) static BUILTIN_BY_SN: &[u32] = &[
    79, 80, 49, 46, 71, 25, 26, 44, 45, 59, 50, 21, 22, 53, 37, 54, 23, 24, 5, 6, 7, 8, 9, 10, 40, 84, 81, 82, 83, 47, 51, 42, 43, 74, 69, 38, 39, 73, 34, 35, 18, 72, 70, 41, 56, 62, 30, 31, 17, 36, 76, 77, 27, 78, 60, 68, 65, 19, 58, 2, 12, 15, 14, 75, 28, 29, 66, 63, 4, 1, 48, 33, 20, 52, 67, 64, 55, 85, 61,
];

pub(crate) static BUILTIN_BY_LN: &[u32] = &[
    38, 39, 35, 36, 44, 45, 37, 1, 2, 34, 33, 42, 43, 74, 69, 72, 70, 71, 73, 76, 77, 78, 68, 65, 75, 66, 67, 64, 79, 80, 46, 18, 49, 41, 56, 62, 25, 26, 30, 31, 17, 59, 27, 32, 60, 50, 21, 5, 22, 6, 19, 58, 53, 54, 3, 11, 12, 15, 14, 16, 28, 29, 63, 23, 24, 4, 48, 40, 7, 84, 81, 8, 82, 9, 83, 10, 20, 51, 52, 47, 55, 61,
];
