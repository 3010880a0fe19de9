use solana_security_txt::security_txt;

security_txt! {
    name: "Tradegate program",
    project_url: "https://github.com/tradegate-labs/tradegate",
    contacts: "security@tradegate.dev",
    policy: "https://github.com/tradegate-labs/tradegate/blob/main/SECURITY.md",
    source_code: "https://github.com/tradegate-labs/tradegate"
}
