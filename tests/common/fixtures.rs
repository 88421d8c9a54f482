//! Reusable test content.

#![allow(dead_code)]

/// Two-contract crowdfunding source
pub const CAMPAIGN_SOL: &str = r#"pragma solidity ^0.4.17;

contract CampaignFactory {
    address[] public deployedCampaigns;

    function createCampaign(uint minimum) public {
        address newCampaign = new Campaign(minimum, msg.sender);
        deployedCampaigns.push(newCampaign);
    }
}

contract Campaign {
    address public manager;
    uint public minimumContribution;

    function Campaign(uint minimum, address creator) public {
        manager = creator;
        minimumContribution = minimum;
    }

    function contribute() public payable {
        require(msg.value > minimumContribution);
    }
}
"#;

/// Source the stub compiler treats as unparseable
pub const BROKEN_SOL: &str = "pragma solidity ^0.4.17;\ncontract Campaign {\n";

/// Standard-JSON response for `CAMPAIGN_SOL`
pub const CAMPAIGN_RESPONSE: &str = r#"{"contracts":{"":{"Campaign":{"abi":[{"constant":false,"inputs":[],"name":"contribute","outputs":[],"payable":true,"stateMutability":"payable","type":"function"}],"metadata":"{}","evm":{"bytecode":{"object":"6060604052","opcodes":"PUSH1 0x60","sourceMap":"301:300:0"},"deployedBytecode":{"object":"60606040","opcodes":"PUSH1","sourceMap":"301:200:0"},"methodIdentifiers":{"contribute()":"d7bb99ba"},"gasEstimates":{"creation":{"codeDepositCost":"151200","executionCost":"40538","totalCost":"191738"},"external":{"contribute()":"20543"},"internal":{}}}},"CampaignFactory":{"abi":[{"constant":false,"inputs":[{"name":"minimum","type":"uint256"}],"name":"createCampaign","outputs":[],"payable":false,"stateMutability":"nonpayable","type":"function"}],"metadata":"{}","evm":{"bytecode":{"object":"6060604052aa","opcodes":"PUSH1 0x60","sourceMap":"26:273:0"},"deployedBytecode":{"object":"60606040aa","opcodes":"PUSH1","sourceMap":"26:200:0"},"methodIdentifiers":{"createCampaign(uint256)":"a3303a75"}}}}},"sources":{"":{"id":0}}}"#;

/// Standard-JSON response for a source that fails to parse
pub const SYNTAX_ERROR_RESPONSE: &str = r#"{"errors":[{"severity":"error","type":"ParserError","message":"Expected token RBrace got end of source","formattedMessage":":3:1: ParserError: Expected token RBrace got end of source\n"}],"sources":{}}"#;

/// Project config enabling pretty artifacts
pub const CONFIG_PRETTY: &str = "[output]\npretty = true\n";
