/// Nationality adjective (or demonym) to country name.
pub(crate) const COUNTRY_NATIONALITY: &[(&str, &str)] = &[
    ("afghan", "afghanistan"),
    ("african", "africa"),
    ("albanian", "albania"),
    ("algerian", "algeria"),
    ("american", "america"),
    ("andorran", "andorra"),
    ("angolan", "angola"),
    ("arabian", "arabia"),
    ("argentine", "argentina"),
    ("armenian", "armenia"),
    ("asian", "asia"),
    ("australian", "australia"),
    ("austrian", "austria"),
    ("azerbaijani", "azerbaijan"),
    ("azeri", "azerbaijan"),
    ("bangladeshi", "bangladesh"),
    ("belgian", "belgium"),
    ("bermudan", "bermuda"),
    ("bolivian", "bolivia"),
    ("bosnian", "bosnia"),
    ("botswanan", "botswana"),
    ("brazilian", "brazil"),
    ("british", "britain"),
    ("bulgarian", "bulgaria"),
    ("burmese", "burma"),
    ("californian", "california"),
    ("cambodian", "cambodia"),
    ("canadian", "canada"),
    ("chadian", "chad"),
    ("chilean", "chile"),
    ("chinese", "china"),
    ("colombian", "colombia"),
    ("croat", "croatia"),
    ("croatian", "croatia"),
    ("cuban", "cuba"),
    ("cypriot", "cyprus"),
    ("czechoslovakian", "czechoslovakia"),
    ("danish", "denmark"),
    ("egyptian", "egypt"),
    ("equadorian", "equador"),
    ("eritrean", "eritrea"),
    ("estonian", "estonia"),
    ("ethiopian", "ethiopia"),
    ("european", "europe"),
    ("fijian", "fiji"),
    ("filipino", "philippines"),
    ("finnish", "finland"),
    ("french", "france"),
    ("gambian", "gambia"),
    ("georgian", "georgia"),
    ("german", "germany"),
    ("ghanian", "ghana"),
    ("greek", "greece"),
    ("grenadan", "grenada"),
    ("guamian", "guam"),
    ("guatemalan", "guatemala"),
    ("guinean", "guinea"),
    ("guyanan", "guyana"),
    ("haitian", "haiti"),
    ("hawaiian", "hawaii"),
    ("holland", "dutch"),
    ("honduran", "honduras"),
    ("hungarian", "hungary"),
    ("icelandic", "iceland"),
    ("indonesian", "indonesia"),
    ("iranian", "iran"),
    ("iraqi", "iraq"),
    ("iraqui", "iraq"),
    ("irish", "ireland"),
    ("israeli", "israel"),
    ("italian", "italy"),
    ("jamaican", "jamaica"),
    ("japanese", "japan"),
    ("jordanian", "jordan"),
    ("kampuchean", "cambodia"),
    ("kenyan", "kenya"),
    ("korean", "korea"),
    ("kuwaiti", "kuwait"),
    ("lankan", "lanka"),
    ("laotian", "laos"),
    ("latvian", "latvia"),
    ("lebanese", "lebanon"),
    ("liberian", "liberia"),
    ("libyan", "libya"),
    ("lithuanian", "lithuania"),
    ("macedonian", "macedonia"),
    ("madagascan", "madagascar"),
    ("malaysian", "malaysia"),
    ("maltese", "malta"),
    ("mauritanian", "mauritania"),
    ("mexican", "mexico"),
    ("micronesian", "micronesia"),
    ("moldovan", "moldova"),
    ("monacan", "monaco"),
    ("mongolian", "mongolia"),
    ("montenegran", "montenegro"),
    ("moroccan", "morocco"),
    ("myanmar", "burma"),
    ("namibian", "namibia"),
    ("nepalese", "nepal"),
    ("nicaraguan", "nicaragua"),
    ("nigerian", "nigeria"),
    ("norwegian", "norway"),
    ("omani", "oman"),
    ("pakistani", "pakistan"),
    ("panamanian", "panama"),
    ("papuan", "papua"),
    ("paraguayan", "paraguay"),
    ("peruvian", "peru"),
    ("portuguese", "portugal"),
    ("romanian", "romania"),
    ("rumania", "romania"),
    ("rumanian", "romania"),
    ("russian", "russia"),
    ("rwandan", "rwanda"),
    ("samoan", "samoa"),
    ("scottish", "scotland"),
    ("serb", "serbia"),
    ("serbian", "serbia"),
    ("siam", "thailand"),
    ("siamese", "thailand"),
    ("slovakia", "slovak"),
    ("slovakian", "slovak"),
    ("slovenian", "slovenia"),
    ("somali", "somalia"),
    ("somalian", "somalia"),
    ("spanish", "spain"),
    ("swedish", "sweden"),
    ("swiss", "switzerland"),
    ("syrian", "syria"),
    ("taiwanese", "taiwan"),
    ("tanzanian", "tanzania"),
    ("texan", "texas"),
    ("thai", "thailand"),
    ("tunisian", "tunisia"),
    ("turkish", "turkey"),
    ("ugandan", "uganda"),
    ("ukrainian", "ukraine"),
    ("uruguayan", "uruguay"),
    ("uzbek", "uzbekistan"),
    ("venezuelan", "venezuela"),
    ("vietnamese", "viet"),
    ("virginian", "virginia"),
    ("yemeni", "yemen"),
    ("yugoslav", "yugoslavia"),
    ("yugoslavian", "yugoslavia"),
    ("zambian", "zambia"),
    ("zealander", "zealand"),
    ("zimbabwean", "zimbabwe"),
];
