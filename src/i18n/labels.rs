//! Bundled translation data.
//!
//! One row per key; every row carries an English entry. Loaded once into a
//! [`TranslationTable`](super::TranslationTable) at startup.

use kisan_core::language::Language::{self, *};

/// Bundled `(key, [(language, text)])` rows.
pub(super) const ENTRIES: &[(&str, &[(Language, &str)])] = &[
    // --- Navigation ---
    (
        "nav.home",
        &[
            (English, "Home"),
            (Hindi, "होम"),
            (Kannada, "ಮುಖ್ಯ"),
            (Tamil, "முகப்பு"),
            (Telugu, "ముఖ్యం"),
            (Marathi, "मुख्य"),
            (Bengali, "হোম"),
            (Gujarati, "હોમ"),
        ],
    ),
    (
        "nav.myFarm",
        &[
            (English, "My Farm"),
            (Hindi, "मेरा खेत"),
            (Kannada, "ನನ್ನ ಫಾರ್ಮ್"),
            (Tamil, "என் பண்ணை"),
            (Telugu, "నా వ్యవసాయం"),
            (Marathi, "माझे शेत"),
            (Bengali, "আমার খামার"),
            (Gujarati, "મારું ખેત"),
        ],
    ),
    (
        "nav.market",
        &[
            (English, "Market"),
            (Hindi, "बाजार"),
            (Kannada, "ಮಾರುಕಟ್ಟೆ"),
            (Tamil, "சந்தை"),
            (Telugu, "మార్కెట్"),
            (Marathi, "बाजार"),
            (Bengali, "বাজার"),
            (Gujarati, "બજાર"),
        ],
    ),
    (
        "nav.schemes",
        &[
            (English, "Schemes"),
            (Hindi, "योजनाएं"),
            (Kannada, "ಯೋಜನೆಗಳು"),
            (Tamil, "திட்டங்கள்"),
            (Telugu, "పథకాలు"),
            (Marathi, "योजना"),
            (Bengali, "প্রকল্প"),
            (Gujarati, "યોજનાઓ"),
        ],
    ),
    (
        "nav.profile",
        &[
            (English, "Profile"),
            (Hindi, "प्रोफाइल"),
            (Kannada, "ಪ್ರೊಫೈಲ್"),
            (Tamil, "சுயவிவரம்"),
            (Telugu, "ప్రొఫైల్"),
            (Marathi, "प्रोफाइल"),
            (Bengali, "প্রোফাইল"),
            (Gujarati, "પ્રોફાઇલ"),
        ],
    ),

    // --- Home screen ---
    (
        "home.greeting",
        &[
            (English, "Hello! I am your agricultural assistant"),
            (Hindi, "नमस्ते! मैं आपका कृषि सहायक हूं"),
            (Kannada, "ನಮಸ್ಕಾರ! ನಾನು ನಿಮ್ಮ ಕೃಷಿ ಸಹಾಯಕ"),
            (Tamil, "வணக்கம்! நான் உங்கள் விவசாய உதவியாளர்"),
            (Telugu, "నమస్కారం! నేను మీ వ్యవసాయ సహాయకుడు"),
            (Marathi, "नमस्कार! मी तुमचा कृषी सहायक आहे"),
            (Bengali, "নমস্কার! আমি আপনার কৃষি সহায়ক"),
            (Gujarati, "નમસ્કાર! હું તમારો કૃષિ સહાયક છું"),
        ],
    ),
    (
        "home.searchPlaceholder",
        &[
            (English, "Search for crops, markets, schemes..."),
            (Hindi, "फसल, बाजार, योजना खोजें..."),
            (Kannada, "ಬೆಳೆಗಳು, ಮಾರುಕಟ್ಟೆಗಳು, ಯೋಜನೆಗಳನ್ನು ಹುಡುಕಿ..."),
            (Tamil, "பயிர்கள், சந்தைகள், திட்டங்களைத் தேடுங்கள்..."),
            (Telugu, "పంటలు, మార్కెట్లు, పథకాలను వెతకండి..."),
            (Marathi, "पिके, बाजार, योजना शोधा..."),
            (Bengali, "ফসল, বাজার, প্রকল্প খুঁজুন..."),
            (Gujarati, "પાક, બજાર, યોજનાઓ શોધો..."),
        ],
    ),
    (
        "home.uploadImage",
        &[
            (English, "Upload Image"),
            (Hindi, "तस्वीर अपलोड करें"),
            (Kannada, "ಚಿತ್ರ ಅಪ್ಲೋಡ್ ಮಾಡಿ"),
            (Tamil, "படத்தைப் பதிவேற்றவும்"),
            (Telugu, "చిత్రం అప్‌లోడ్ చేయండి"),
            (Marathi, "चित्र अपलोड करा"),
            (Bengali, "ছবি আপলোড করুন"),
            (Gujarati, "ચિત્ર અપલોડ કરો"),
        ],
    ),
    (
        "home.quickAccess",
        &[
            (English, "Quick Access"),
            (Hindi, "त्वरित पहुंच"),
            (Kannada, "ತ್ವರಿತ ಪ್ರವೇಶ"),
            (Tamil, "விரைவு அணுகல்"),
            (Telugu, "త్వరిత ప్రవేశం"),
            (Marathi, "द्रुत प्रवेश"),
            (Bengali, "দ্রুত প্রবেশ"),
            (Gujarati, "ઝડપી પ્રવેશ"),
        ],
    ),
    (
        "home.todaysWeather",
        &[
            (English, "Today's Weather"),
            (Hindi, "आज का मौसम"),
            (Kannada, "ಇಂದಿನ ಹವಾಮಾನ"),
            (Tamil, "இன்றைய வானிலை"),
            (Telugu, "నేటి వాతావరణం"),
            (Marathi, "आजचे हवामान"),
            (Bengali, "আজকের আবহাওয়া"),
            (Gujarati, "આજનું હવામાન"),
        ],
    ),

    // --- Crop diagnosis ---
    (
        "crop.info",
        &[
            (English, "Crop Info"),
            (Hindi, "फसल जानकारी"),
            (Kannada, "ಬೆಳೆ ಮಾಹಿತಿ"),
            (Tamil, "பயிர் தகவல்"),
            (Telugu, "పంట సమాచారం"),
            (Marathi, "पिक माहिती"),
            (Bengali, "ফসল তথ্য"),
            (Gujarati, "પાક માહિતી"),
        ],
    ),
    (
        "crop.diagnosis",
        &[
            (English, "Crop Diagnosis"),
            (Hindi, "फसल निदान"),
            (Kannada, "ಬೆಳೆ ರೋಗನಿರ್ಣಯ"),
            (Tamil, "பயிர் நோயறிதல்"),
            (Telugu, "పంట నిర్ధారణ"),
            (Marathi, "पिक निदान"),
            (Bengali, "ফসল নির্ণয়"),
            (Gujarati, "પાક નિદાન"),
        ],
    ),
    (
        "crop.uploadImage",
        &[
            (English, "Upload Crop Image"),
            (Hindi, "फसल की तस्वीर अपलोड करें"),
            (Kannada, "ಬೆಳೆಯ ಚಿತ್ರ ಅಪ್ಲೋಡ್ ಮಾಡಿ"),
            (Tamil, "பயிர் படத்தைப் பதிவேற்றவும்"),
            (Telugu, "పంట చిత్రాన్ని అప్‌లోడ్ చేయండి"),
            (Marathi, "पिकाचे चित्र अपलोड करा"),
            (Bengali, "ফসলের ছবি আপলোড করুন"),
            (Gujarati, "પાકનું ચિત્ર અપલોડ કરો"),
        ],
    ),
    (
        "crop.gallery",
        &[
            (English, "Gallery"),
            (Hindi, "गैलरी"),
            (Kannada, "ಗ್ಯಾಲರಿ"),
            (Tamil, "தொகுப்பு"),
            (Telugu, "గ్యాలరీ"),
            (Marathi, "गॅलरी"),
            (Bengali, "গ্যালারি"),
            (Gujarati, "ગેલેરી"),
        ],
    ),
    (
        "crop.camera",
        &[
            (English, "Camera"),
            (Hindi, "कैमरा"),
            (Kannada, "ಕ್ಯಾಮೆರಾ"),
            (Tamil, "கேமரா"),
            (Telugu, "కెమెరా"),
            (Marathi, "कॅमेरा"),
            (Bengali, "ক্যামেরা"),
            (Gujarati, "કેમેરા"),
        ],
    ),
    (
        "crop.analyzing",
        &[
            (English, "Analyzing crop..."),
            (Hindi, "फसल का विश्लेषण हो रहा है..."),
            (Kannada, "ಬೆಳೆಯನ್ನು ವಿಶ್ಲೇಷಿಸುತ್ತಿದೆ..."),
            (Tamil, "பயிரை பகுப்பாய்வு செய்கிறது..."),
            (Telugu, "పంటను విశ్లేషిస్తోంది..."),
            (Marathi, "पिकाचे विश्लेषण करत आहे..."),
            (Bengali, "ফসল বিশ্লেষণ করছে..."),
            (Gujarati, "પાકનું વિશ્લેષણ કરી રહ્યું છે..."),
        ],
    ),
    (
        "crop.diseaseIdentified",
        &[
            (English, "Disease Identified"),
            (Hindi, "रोग की पहचान"),
            (Kannada, "ರೋಗ ಗುರುತಿಸಲಾಗಿದೆ"),
            (Tamil, "நோய் கண்டறியப்பட்டது"),
            (Telugu, "వ్యాధి గుర్తించబడింది"),
            (Marathi, "रोगाची ओळख"),
            (Bengali, "রোগ চিহ্নিত"),
            (Gujarati, "રોગ ઓળખાયો"),
        ],
    ),
    (
        "crop.treatmentRecommendations",
        &[
            (English, "Treatment Recommendations"),
            (Hindi, "उपचार सुझाव"),
            (Kannada, "ಚಿಕಿತ್ಸಾ ಶಿಫಾರಸುಗಳು"),
            (Tamil, "சிகிச்சை பரிந்துரைகள்"),
            (Telugu, "చికిత్స సిఫారసులు"),
            (Marathi, "उपचार शिफारसी"),
            (Bengali, "চিকিৎসা সুপারিশ"),
            (Gujarati, "સારવાર ભલામણો"),
        ],
    ),
    (
        "crop.additionalResources",
        &[
            (English, "Additional Resources"),
            (Hindi, "अतिरिक्त संसाधन"),
            (Kannada, "ಹೆಚ್ಚುವರಿ ಸಂಪನ್ಮೂಲಗಳು"),
            (Tamil, "கூடுதல் வளங்கள்"),
            (Telugu, "అదనపు వనరులు"),
            (Marathi, "अतिरिक्त संसाधने"),
            (Bengali, "অতিরিক্ত সংস্থান"),
            (Gujarati, "વધારાના સંસાધનો"),
        ],
    ),

    // --- Market prices ---
    (
        "market.prices",
        &[
            (English, "Market Prices"),
            (Hindi, "बाजार भाव"),
            (Kannada, "ಮಾರುಕಟ್ಟೆ ಬೆಲೆಗಳು"),
            (Tamil, "சந்தை விலைகள்"),
            (Telugu, "మార్కెట్ ధరలు"),
            (Marathi, "बाजार भाव"),
            (Bengali, "বাজার দর"),
            (Gujarati, "બજાર ભાવ"),
        ],
    ),
    (
        "market.todaysPrices",
        &[
            (English, "Today's Prices"),
            (Hindi, "आज के भाव"),
            (Kannada, "ಇಂದಿನ ಬೆಲೆಗಳು"),
            (Tamil, "இன்றைய விலைகள்"),
            (Telugu, "నేటి ధరలు"),
            (Marathi, "आजचे भाव"),
            (Bengali, "আজকের দর"),
            (Gujarati, "આજના ભાવ"),
        ],
    ),
    (
        "market.aiRecommendations",
        &[
            (English, "AI Selling Recommendations"),
            (Hindi, "AI बिक्री सुझाव"),
            (Kannada, "AI ಮಾರಾಟ ಶಿಫಾರಸುಗಳು"),
            (Tamil, "AI விற்பனை பரிந்துரைகள்"),
            (Telugu, "AI అమ్మకాల సిఫారసులు"),
            (Marathi, "AI विक्री शिफारसी"),
            (Bengali, "AI বিক্রয় সুপারিশ"),
            (Gujarati, "AI વેચાણ ભલામણો"),
        ],
    ),
    (
        "market.averagePrice",
        &[
            (English, "Average price"),
            (Hindi, "औसत भाव"),
            (Kannada, "ಸರಾಸರಿ ಬೆಲೆ"),
            (Tamil, "சராசரி விலை"),
            (Telugu, "సగటు ధర"),
            (Marathi, "सरासरी भाव"),
            (Bengali, "গড় দর"),
            (Gujarati, "સરેરાશ ભાવ"),
        ],
    ),
    (
        "market.current",
        &[
            (English, "Current"),
            (Hindi, "वर्तमान"),
            (Kannada, "ಪ್ರಸ್ತುತ"),
            (Tamil, "தற்போதைய"),
            (Telugu, "ప్రస్తుత"),
            (Marathi, "सध्याचे"),
            (Bengali, "বর্তমান"),
            (Gujarati, "વર્તમાન"),
        ],
    ),
    (
        "market.viewDetails",
        &[
            (English, "View Details"),
            (Hindi, "विवरण देखें"),
            (Kannada, "ವಿವರಗಳನ್ನು ವೀಕ್ಷಿಸಿ"),
            (Tamil, "விவரங்களைப் பார்க்கவும்"),
            (Telugu, "వివరాలను చూడండి"),
            (Marathi, "तपशील पहा"),
            (Bengali, "বিস্তারিত দেখুন"),
            (Gujarati, "વિગતો જુઓ"),
        ],
    ),

    // --- Government schemes ---
    (
        "schemes.government",
        &[
            (English, "Government Schemes"),
            (Hindi, "सरकारी योजनाएं"),
            (Kannada, "ಸರ್ಕಾರಿ ಯೋಜನೆಗಳು"),
            (Tamil, "அரசு திட்டங்கள்"),
            (Telugu, "ప్రభుత్వ పథకాలు"),
            (Marathi, "सरकारी योजना"),
            (Bengali, "সরকারি প্রকল্প"),
            (Gujarati, "સરકારી યોજનાઓ"),
        ],
    ),
    (
        "schemes.popular",
        &[
            (English, "Popular Schemes"),
            (Hindi, "लोकप्रिय योजनाएं"),
            (Kannada, "ಜನಪ್ರಿಯ ಯೋಜನೆಗಳು"),
            (Tamil, "பிரபலமான திட்டங்கள்"),
            (Telugu, "జనాదరణ పొందిన పథకాలు"),
            (Marathi, "लोकप्रिय योजना"),
            (Bengali, "জনপ্রিয় প্রকল্প"),
            (Gujarati, "લોકપ્રિય યોજનાઓ"),
        ],
    ),
    (
        "schemes.all",
        &[
            (English, "All Schemes"),
            (Hindi, "सभी योजनाएं"),
            (Kannada, "ಎಲ್ಲಾ ಯೋಜನೆಗಳು"),
            (Tamil, "அனைத்து திட்டங்கள்"),
            (Telugu, "అన్ని పథకాలు"),
            (Marathi, "सर्व योजना"),
            (Bengali, "সব প্রকল্প"),
            (Gujarati, "બધી યોજનાઓ"),
        ],
    ),
    (
        "schemes.eligibility",
        &[
            (English, "Eligibility"),
            (Hindi, "पात्रता"),
            (Kannada, "ಅರ್ಹತೆ"),
            (Tamil, "தகுதி"),
            (Telugu, "అర్హత"),
            (Marathi, "पात्रता"),
            (Bengali, "যোগ্যতা"),
            (Gujarati, "પાત્રતા"),
        ],
    ),
    (
        "schemes.applyNow",
        &[
            (English, "Apply Now"),
            (Hindi, "अभी आवेदन करें"),
            (Kannada, "ಈಗ ಅರ್ಜಿ ಸಲ್ಲಿಸಿ"),
            (Tamil, "இப்போது விண்ணப்பிக்கவும்"),
            (Telugu, "ఇప్పుడే దరఖాస్తు చేయండి"),
            (Marathi, "आता अर्ज करा"),
            (Bengali, "এখনই আবেদন করুন"),
            (Gujarati, "હવે અરજી કરો"),
        ],
    ),

    // --- My farm ---
    (
        "farm.myFarm",
        &[
            (English, "My Farm"),
            (Hindi, "मेरा खेत"),
            (Kannada, "ನನ್ನ ಫಾರ್ಮ್"),
            (Tamil, "என் பண்ணை"),
            (Telugu, "నా వ్యవసాయం"),
            (Marathi, "माझे शेत"),
            (Bengali, "আমার খামার"),
            (Gujarati, "મારું ખેત"),
        ],
    ),
    (
        "farm.todaysAdvice",
        &[
            (English, "Today's Advice"),
            (Hindi, "आज की सलाह"),
            (Kannada, "ಇಂದಿನ ಸಲಹೆ"),
            (Tamil, "இன்றைய அறிவுரை"),
            (Telugu, "నేటి సలహా"),
            (Marathi, "आजचा सल्ला"),
            (Bengali, "আজকের পরামর্শ"),
            (Gujarati, "આજની સલાહ"),
        ],
    ),
    (
        "farm.upcomingTasks",
        &[
            (English, "Upcoming Tasks"),
            (Hindi, "आने वाले कार्य"),
            (Kannada, "ಮುಂದಿನ ಕಾರ್ಯಗಳು"),
            (Tamil, "வரும் பணிகள்"),
            (Telugu, "రాబోయే పనులు"),
            (Marathi, "येणारी कामे"),
            (Bengali, "আসন্ন কাজ"),
            (Gujarati, "આવતા કાર્યો"),
        ],
    ),
    (
        "farm.dailyTasks",
        &[
            (English, "Daily Tasks"),
            (Hindi, "दैनिक कार्य"),
            (Kannada, "ದೈನಂದಿನ ಕಾರ್ಯಗಳು"),
            (Tamil, "தினசரி பணிகள்"),
            (Telugu, "రోజువారీ పనులు"),
            (Marathi, "दैनिक कामे"),
            (Bengali, "দৈনিক কাজ"),
            (Gujarati, "દૈનિક કાર્યો"),
        ],
    ),

    // --- Voice interaction ---
    (
        "voice.listening",
        &[
            (English, "Listening..."),
            (Hindi, "सुन रहा हूं..."),
            (Kannada, "ಕೇಳುತ್ತಿದೆ..."),
            (Tamil, "கேட்டுக்கொண்டிருக்கிறது..."),
            (Telugu, "వింటోంది..."),
            (Marathi, "ऐकत आहे..."),
            (Bengali, "শুনছে..."),
            (Gujarati, "સાંભળી રહ્યું છે..."),
        ],
    ),
    (
        "voice.pleaseSpeak",
        &[
            (English, "Please speak"),
            (Hindi, "कृपया बोलें"),
            (Kannada, "ದಯವಿಟ್ಟು ಮಾತನಾಡಿ"),
            (Tamil, "தயவுசெய்து பேசுங்கள்"),
            (Telugu, "దయచేసి మాట్లాడండి"),
            (Marathi, "कृपया बोला"),
            (Bengali, "অনুগ্রহ করে বলুন"),
            (Gujarati, "કૃપા કરીને બોલો"),
        ],
    ),
    (
        "voice.understood",
        &[
            (English, "Understood!"),
            (Hindi, "समझ गया!"),
            (Kannada, "ಅರ್ಥವಾಯಿತು!"),
            (Tamil, "புரிந்தது!"),
            (Telugu, "అర్థమైంది!"),
            (Marathi, "समजले!"),
            (Bengali, "বুঝেছি!"),
            (Gujarati, "સમજાયું!"),
        ],
    ),
    (
        "voice.youSaid",
        &[
            (English, "You said"),
            (Hindi, "आपने कहा"),
            (Kannada, "ನೀವು ಹೇಳಿದ್ದು"),
            (Tamil, "நீங்கள் சொன்னது"),
            (Telugu, "మీరు చెప్పింది"),
            (Marathi, "तुम्ही म्हणाल"),
            (Bengali, "আপনি বলেছেন"),
            (Gujarati, "તમે કહ્યું"),
        ],
    ),
    (
        "voice.sorry",
        &[
            (English, "Sorry"),
            (Hindi, "माफ करें"),
            (Kannada, "ಕ್ಷಮಿಸಿ"),
            (Tamil, "மன்னிக்கவும்"),
            (Telugu, "క్షమించండి"),
            (Marathi, "माफ करा"),
            (Bengali, "দুঃখিত"),
            (Gujarati, "માફ કરશો"),
        ],
    ),
    (
        "voice.errorUnderstanding",
        &[
            (English, "Error understanding voice. Please try again."),
            (Hindi, "आवाज समझने में समस्या हुई। कृपया दोबारा कोशिश करें।"),
            (Kannada, "ಧ್ವನಿ ಅರ್ಥಮಾಡಿಕೊಳ್ಳುವಲ್ಲಿ ದೋಷ. ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ."),
            (Tamil, "குரல் புரிந்துகொள்வதில் பிழை. தயவுசெய்து மீண்டும் முயற்சிக்கவும்."),
            (Telugu, "వాయిస్ అర్థం చేసుకోవడంలో లోపం. దయచేసి మళ్లీ ప్రయత్నించండి."),
            (Marathi, "आवाज समजण्यात त्रुटी. कृपया पुन्हा प्रयत्न करा."),
            (Bengali, "কণ্ঠস্বর বুঝতে ত্রুটি। অনুগ্রহ করে আবার চেষ্টা করুন।"),
            (Gujarati, "અવાજ સમજવામાં ભૂલ. કૃપા કરીને ફરી પ્રયાસ કરો."),
        ],
    ),
    (
        "voice.notSupported",
        &[
            (English, "Your browser does not support voice"),
            (Hindi, "आपका ब्राउज़र वॉइस सपोर्ट नहीं करता"),
            (Kannada, "ನಿಮ್ಮ ಬ್ರೌಸರ್ ಧ್ವನಿ ಬೆಂಬಲವನ್ನು ನೀಡುವುದಿಲ್ಲ"),
            (Tamil, "உங்கள் உலாவி குரல் ஆதரவு அளிக்காது"),
            (Telugu, "మీ బ్రౌజర్ వాయిస్ సపోర్ట్ చేయదు"),
            (Marathi, "तुमचा ब्राउझर व्हॉइस सपोर्ट करत नाही"),
            (Bengali, "আপনার ব্রাউজার ভয়েস সাপোর্ট করে না"),
            (Gujarati, "તમારું બ્રાઉઝર વૉઇસ સપોર્ટ કરતું નથી"),
        ],
    ),
    (
        "voice.commandNotUnderstood",
        &[
            (English, "Command not understood"),
            (Hindi, "कमांड समझा नहीं"),
            (Kannada, "ಆಜ್ಞೆ ಅರ್ಥವಾಗಲಿಲ್ಲ"),
            (Tamil, "கட்டளை புரியவில்லை"),
            (Telugu, "కమాండ్ అర్థం కాలేదు"),
            (Marathi, "आदेश समजला नाही"),
            (Bengali, "কমান্ড বুঝতে পারিনি"),
            (Gujarati, "આદેશ સમજાયો નથી"),
        ],
    ),
    (
        "voice.askAbout",
        &[
            (English, "Please ask about \"crop\", \"market\", \"scheme\" or \"farm\""),
            (Hindi, "कृपया \"फसल\", \"बाजार\", \"योजना\" या \"खेत\" के बारे में पूछें"),
            (Kannada, "ದಯವಿಟ್ಟು \"ಬೆಳೆ\", \"ಮಾರುಕಟ್ಟೆ\", \"ಯೋಜನೆ\" ಅಥವಾ \"ಫಾರ್ಮ್\" ಬಗ್ಗೆ ಕೇಳಿ"),
            (Tamil, "தயவுசெய்து \"பயிர்\", \"சந்தை\", \"திட்டம்\" அல்லது \"பண்ணை\" பற்றி கேளுங்கள்"),
            (Telugu, "దయచేసి \"పంట\", \"మార్కెట్\", \"పథకం\" లేదా \"వ్యవసాయం\" గురించి అడగండి"),
            (Marathi, "कृपया \"पिक\", \"बाजार\", \"योजना\" किंवा \"शेत\" बद्दल विचारा"),
            (Bengali, "অনুগ্রহ করে \"ফসল\", \"বাজার\", \"প্রকল্প\" বা \"খামার\" সম্পর্কে জিজ্ঞাসা করুন"),
            (Gujarati, "કૃપા કરીને \"પાક\", \"બજાર\", \"યોજના\" અથવા \"ખેત\" વિશે પૂછો"),
        ],
    ),

    // --- System messages ---
    (
        "system.uploading",
        &[
            (English, "Uploading..."),
            (Hindi, "अपलोड हो रहा है..."),
            (Kannada, "ಅಪ್ಲೋಡ್ ಮಾಡುತ್ತಿದೆ..."),
            (Tamil, "பதிவேற்றுகிறது..."),
            (Telugu, "అప్‌లోడ్ అవుతోంది..."),
            (Marathi, "अपलोड करत आहे..."),
            (Bengali, "আপলোড করছে..."),
            (Gujarati, "અપલોડ કરી રહ્યું છે..."),
        ],
    ),
    (
        "system.pleaseWait",
        &[
            (English, "Please wait..."),
            (Hindi, "कृपया प्रतीक्षा करें..."),
            (Kannada, "ದಯವಿಟ್ಟು ನಿರೀಕ್ಷಿಸಿ..."),
            (Tamil, "தயவுசெய்து காத்திருங்கள்..."),
            (Telugu, "దయచేసి వేచి ఉండండి..."),
            (Marathi, "कृपया प्रतीक्षा करा..."),
            (Bengali, "অনুগ্রহ করে অপেক্ষা করুন..."),
            (Gujarati, "કૃપા કરીને રાહ જુઓ..."),
        ],
    ),
    (
        "system.tryAgain",
        &[
            (English, "Please try again"),
            (Hindi, "कृपया दोबारा कोशिश करें"),
            (Kannada, "ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ"),
            (Tamil, "தயவுசெய்து மீண்டும் முயற்சிக்கவும்"),
            (Telugu, "దయచేసి మళ్లీ ప్రయత్నించండి"),
            (Marathi, "कृपया पुन्हा प्रयत्न करा"),
            (Bengali, "অনুগ্রহ করে আবার চেষ্টা করুন"),
            (Gujarati, "કૃપા કરીને ફરી પ્રયાસ કરો"),
        ],
    ),
    (
        "system.error",
        &[
            (English, "An error occurred"),
            (Hindi, "एक त्रुटि हुई"),
            (Kannada, "ದೋಷ ಸಂಭವಿಸಿದೆ"),
            (Tamil, "பிழை ஏற்பட்டது"),
            (Telugu, "దోషం సంభవించింది"),
            (Marathi, "एक त्रुटी झाली"),
            (Bengali, "একটি ত্রুটি ঘটেছে"),
            (Gujarati, "એક ભૂલ થઈ"),
        ],
    ),

    // --- Settings ---
    (
        "settings.language",
        &[
            (English, "Language"),
            (Hindi, "भाषा"),
            (Kannada, "ಭಾಷೆ"),
            (Tamil, "மொழி"),
            (Telugu, "భాష"),
            (Marathi, "भाषा"),
            (Bengali, "ভাষা"),
            (Gujarati, "ભાષા"),
        ],
    ),
    (
        "settings.languageChanged",
        &[
            (English, "Language changed"),
            (Hindi, "भाषा बदल दी गई"),
            (Kannada, "ಭಾಷೆ ಬದಲಾಯಿಸಲಾಗಿದೆ"),
            (Tamil, "மொழி மாற்றப்பட்டது"),
            (Telugu, "భాష మార్చబడింది"),
            (Marathi, "भाषा बदलली"),
            (Bengali, "ভাষা পরিবর্তন করা হয়েছে"),
            (Gujarati, "ભાષા બદલાઈ ગઈ"),
        ],
    ),
];
